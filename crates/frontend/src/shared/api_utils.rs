//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// The API is served from the same origin as the page, so this is just the
/// current window origin.
///
/// # Returns
/// - Base URL like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
/// Example: api_url("/api/jobs/123")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
