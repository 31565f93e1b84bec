use super::*;

#[test]
fn bare_hash_passes_through() {
    assert_eq!(scroll_target("#"), None);
}

#[test]
fn top_passes_through() {
    assert_eq!(scroll_target("#top"), None);
}

#[test]
fn section_fragment_is_intercepted() {
    assert_eq!(scroll_target("#projects"), Some("#projects"));
    assert_eq!(scroll_target("#topics"), Some("#topics"));
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(scroll_target("/about#team"), None);
    assert_eq!(scroll_target("https://example.org/#x"), None);
    assert_eq!(scroll_target(""), None);
}

#[test]
fn selector_matches_fragment_links() {
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
}
