use crate::location::location_pathname;
use crate::routing::{ViewSelection, path_from_segments, select};
use crate::views::{Drive, Home, Login, Ride};
use dioxus::prelude::*;

/// Fills the page container for the root path
#[component]
pub fn Root() -> Element {
    rsx! {
        PathRouter { segments: Vec::new() }
    }
}

/// Fills the page container with the view routed at the current location
///
/// The router's segments are already decoded and normalized, so the view is
/// selected from the raw pathname reported by the host.
#[component]
pub fn PathRouter(segments: Vec<String>) -> Element {
    let path = location_pathname().unwrap_or_else(|| {
        log::warn!("Host location unavailable, no view can be selected");
        String::new()
    });
    log::debug!(
        "Raw path {:?}, router path {:?}",
        path,
        path_from_segments(&segments)
    );

    rsx! {
        RoutedContainer { path }
    }
}

#[component]
fn RoutedContainer(path: String) -> Element {
    let selection = select(&path);

    rsx! {
        div { class: "container",
            SelectedView { selection }
        }
    }
}

/// Render step for a selection
///
/// `Root` shows the landing view. Unknown paths leave the container empty.
#[component]
fn SelectedView(selection: ViewSelection) -> Element {
    match selection {
        ViewSelection::Root | ViewSelection::Home => rsx! {
            Home {}
        },
        ViewSelection::Drive => rsx! {
            Drive {}
        },
        ViewSelection::Ride => rsx! {
            Ride {}
        },
        ViewSelection::Login => rsx! {
            Login {}
        },
        ViewSelection::Unmatched => {
            log::warn!("No view routed for the current path, rendering nothing");
            rsx! {}
        }
    }
}
