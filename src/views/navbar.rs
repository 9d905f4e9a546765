use crate::Route;
use crate::routing::ViewSelection;
use dioxus::prelude::*;

const NAV_VIEWS: [ViewSelection; 4] = [
    ViewSelection::Home,
    ViewSelection::Drive,
    ViewSelection::Ride,
    ViewSelection::Login,
];

#[component]
pub fn Navbar() -> Element {
    let links = NAV_VIEWS
        .into_iter()
        .filter_map(|view| Route::for_view(view).map(|route| (view, route)));

    rsx! {
        nav { id: "navbar",
            if let Some(root) = Route::for_view(ViewSelection::Root) {
                div { class: "brand",
                    Link { to: root, h1 { "Rideshare" } }
                }
            }
            for (view, route) in links {
                Link { key: "{view}", to: route, "{view}" }
            }
        }
        Outlet::<Route> {}
    }
}
