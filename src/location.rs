//! Host location access
//!
//! The path is returned exactly as the host reports it: still percent-encoded,
//! trailing slash kept, without query or fragment. This is the string the
//! routing table is matched against.

/// Pathname of the page in the browser
#[cfg(feature = "web")]
pub fn location_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Path of the request being server-side rendered
#[cfg(all(feature = "server", not(feature = "web")))]
pub fn location_pathname() -> Option<String> {
    use dioxus::prelude::server_context;

    let path = server_context().request_parts().uri.path().to_string();
    Some(path)
}

#[cfg(not(any(feature = "server", feature = "web")))]
pub fn location_pathname() -> Option<String> {
    None
}
