//! Mobile navigation open/closed state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class toggled on the links panel.
pub const OPEN_CLASS: &str = "open";

pub const OPEN_ICON: &str = "fas fa-times";
pub const CLOSED_ICON: &str = "fas fa-bars";

/// Icon classes for the toggle button given the panel state.
pub fn icon_class(open: bool) -> &'static str {
    if open { OPEN_ICON } else { CLOSED_ICON }
}
