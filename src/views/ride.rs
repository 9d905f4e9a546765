use dioxus::prelude::*;

#[component]
pub fn Ride() -> Element {
    rsx! {
        div { id: "ride-page", class: "page",
            h1 { "Ride" }
            h2 { "Find a ride" }
        }
    }
}
