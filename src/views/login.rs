use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { id: "login-page", class: "page",
            h1 { "Login" }
        }
    }
}
