use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        div { id: "home-page", class: "page active",
            header { class: "app-header",
                h1 { "Rideshare" }
            }
            main {
                h2 { "Share the road" }
                p { "Offer a seat in your car or find a ride going your way." }
            }
        }
    }
}
