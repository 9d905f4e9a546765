//! Routing errors
//!
//! Selection itself never fails: [`crate::routing::select`] falls back to
//! [`crate::routing::ViewSelection::Unmatched`]. These errors are produced by
//! the strict lookups used from the command line.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No entry of the route table matches the location path.
    #[error("No view is routed at path: {0:?}")]
    UnmatchedPath(String),

    /// A view name does not correspond to any known view.
    #[error("Unresolved view identifier: {0}")]
    UnresolvedView(String),
}
