//! Path based view selection
//!
//! This module maps a location path to one of the application views. The
//! lookup is a pure function of the path: the caller reads the location from
//! the host (the Dioxus router on the web, the command line on the server)
//! and passes it in explicitly.

use crate::error::RouteError;
use serde::Serialize;

/// The view chosen for a location path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewSelection {
    Root,
    Home,
    Drive,
    Ride,
    Login,
    /// Any path absent from [`ROUTE_TABLE`]
    Unmatched,
}

/// Fixed routing table, matched exactly and case-sensitively
pub const ROUTE_TABLE: &[(&str, ViewSelection)] = &[
    ("/", ViewSelection::Root),
    ("/Home", ViewSelection::Home),
    ("/Drive", ViewSelection::Drive),
    ("/Ride", ViewSelection::Ride),
    ("/Login", ViewSelection::Login),
];

/// Selects the view for `path`, falling back to [`ViewSelection::Unmatched`]
pub fn select(path: &str) -> ViewSelection {
    let selection = ROUTE_TABLE
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, view)| *view)
        .unwrap_or(ViewSelection::Unmatched);
    log::debug!("Path {:?} selects {:?}", path, selection);
    selection
}

/// Strict variant of [`select`]: an unmatched path is an error
pub fn resolve(path: &str) -> Result<ViewSelection, RouteError> {
    match select(path) {
        ViewSelection::Unmatched => Err(RouteError::UnmatchedPath(path.to_string())),
        view => Ok(view),
    }
}

/// Rebuilds a location path from the segments captured by the router
///
/// An empty segment list is the root path.
pub fn path_from_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

impl ViewSelection {
    /// Every variant, in table order, followed by `Unmatched`
    pub const ALL: [ViewSelection; 6] = [
        ViewSelection::Root,
        ViewSelection::Home,
        ViewSelection::Drive,
        ViewSelection::Ride,
        ViewSelection::Login,
        ViewSelection::Unmatched,
    ];

    /// Returns the path routed to this view, if any
    pub fn path(&self) -> Option<&'static str> {
        ROUTE_TABLE
            .iter()
            .find(|(_, view)| view == self)
            .map(|(route, _)| *route)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewSelection::Root => "Root",
            ViewSelection::Home => "Home",
            ViewSelection::Drive => "Drive",
            ViewSelection::Ride => "Ride",
            ViewSelection::Login => "Login",
            ViewSelection::Unmatched => "Unmatched",
        }
    }
}

impl std::fmt::Display for ViewSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ViewSelection {
    type Err = RouteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ViewSelection::ALL
            .into_iter()
            .find(|view| view.name() == name)
            .ok_or_else(|| RouteError::UnresolvedView(name.to_string()))
    }
}

/// One row of the routing table, as exported by `--print-routes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewSelection,
}

pub fn route_entries() -> Vec<RouteEntry> {
    ROUTE_TABLE
        .iter()
        .map(|&(path, view)| RouteEntry { path, view })
        .collect()
}
