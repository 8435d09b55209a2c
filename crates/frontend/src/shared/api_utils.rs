//! API utilities for widget-backend communication

/// Base URL for API requests
///
/// The server that hosts the widget also takes its API calls, so this is the
/// origin of the current page.
///
/// # Returns
/// - Origin like "https://estimate.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/track-calculation");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
