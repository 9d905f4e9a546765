//! Web interface components for the Rideshare application
//!
//! This module contains the Dioxus components that make up the web interface:
//! the navigation layout, the path router that fills the page container, and
//! the views it can select.

/// Navigation bar layout
mod navbar;
pub use navbar::Navbar;

/// Container rendering the view selected for the current path
mod router;
pub use router::{PathRouter, Root};

/// Landing page component
mod home;
pub use home::Home;

/// Driver page component
mod drive;
pub use drive::Drive;

/// Passenger page component
mod ride;
pub use ride::Ride;

/// Sign-in page component
mod login;
pub use login::Login;
