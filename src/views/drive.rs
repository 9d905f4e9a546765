use dioxus::prelude::*;

#[component]
pub fn Drive() -> Element {
    rsx! {
        div { id: "drive-page", class: "page",
            h1 { "Drive" }
            h2 { "Offer a ride" }
        }
    }
}
