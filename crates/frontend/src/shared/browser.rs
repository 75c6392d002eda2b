use web_sys::window;

/// Full-page navigation. Used for console switching and the login
/// round-trip; everything inside a console goes through tabs instead.
pub fn navigate(path: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_href(path);
    }
}

/// Current query string including the leading '?', or "" when absent.
pub fn search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Current pathname, or "/" when the window is unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
