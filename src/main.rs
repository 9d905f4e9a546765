#![allow(non_snake_case)]

mod cli;
mod error;
mod location;
mod routing;
mod views;

use dioxus::prelude::*;
use routing::ViewSelection;
use views::{Navbar, PathRouter, Root};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Every location is handed to [`PathRouter`], which does the view selection
/// itself, below the navigation bar layout. `Root` only exists so that links to
/// the root path render as `/`.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Root {},
        #[route("/:..segments")]
        PathRouter { segments: Vec<String> },
}

impl Route {
    /// Link target for a view, `None` for views without a path
    pub fn for_view(view: ViewSelection) -> Option<Route> {
        let path = view.path()?;
        if view == ViewSelection::Root {
            return Some(Route::Root {});
        }
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Some(Route::PathRouter { segments })
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        use clap::Parser;

        env_logger::init();

        let args = cli::Args::parse();
        match cli::run_command(&args.command()) {
            Ok(Some(output)) => {
                println!("{}", output);
                return;
            }
            Ok(None) => log::info!("Launching rideshare"),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_route_for_view_segments() {
        assert_eq!(
            Route::for_view(ViewSelection::Ride),
            Some(Route::PathRouter {
                segments: vec!["Ride".to_string()]
            })
        );
        assert_eq!(Route::for_view(ViewSelection::Root), Some(Route::Root {}));
    }

    #[test]
    fn test_route_for_unmatched_view() {
        assert_eq!(Route::for_view(ViewSelection::Unmatched), None);
    }

    #[test]
    fn test_route_links_select_their_view() {
        for view in ViewSelection::ALL {
            if let Some(route) = Route::for_view(view) {
                assert_eq!(routing::select(&route.to_string()), view);
            }
        }
    }

    #[test]
    fn test_route_display() {
        let route = Route::for_view(ViewSelection::Drive).unwrap();
        assert_eq!(route.to_string(), "/Drive");
    }

    #[test]
    fn test_root_link_targets_root_path() {
        let route = Route::for_view(ViewSelection::Root).unwrap();
        assert_eq!(route.to_string(), "/");
    }

    #[test]
    fn test_router_normalized_paths_stay_unmatched() {
        // The router accepts and normalizes these, the raw path must not match.
        for raw in ["/Home/", "/%52ide", "/home"] {
            assert!(Route::from_str(raw).is_ok(), "{} not routed", raw);
            assert_eq!(routing::select(raw), ViewSelection::Unmatched);
        }
    }
}
