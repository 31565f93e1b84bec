//! Same-page anchor classification for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Selector for links handled by smooth scroll.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Fragments left to the browser's default behavior.
const PASSTHROUGH: [&str; 2] = ["#", "#top"];

/// Selector to scroll to for `href`, or `None` when the click should be left
/// alone (not a fragment, or `#` / `#top`).
pub fn scroll_target(href: &str) -> Option<&str> {
    if !href.starts_with('#') || PASSTHROUGH.contains(&href) {
        return None;
    }
    Some(href)
}
