//! Smooth scrolling for same-page `#fragment` links.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::nav_menu::NavPanel;
use crate::error::PortfolioError;
use crate::util::anchor::{ANCHOR_SELECTOR, scroll_target};
use crate::util::dom::{self, Listener};

/// Intercept fragment-link clicks. `nav` is closed after a successful scroll.
///
/// # Errors
///
/// Fails if a handler cannot be attached.
pub fn mount(nav: Option<NavPanel>) -> Result<Vec<Listener>, PortfolioError> {
    let mut listeners = Vec::new();
    for anchor in dom::query_all(ANCHOR_SELECTOR)? {
        let anchor_for_click = anchor.clone();
        let nav = nav.clone();
        listeners.push(Listener::new(&anchor, "click", move |event| {
            let Some(href) = anchor_for_click.get_attribute("href") else {
                return;
            };
            let Some(selector) = scroll_target(&href) else {
                return;
            };
            event.prevent_default();
            scroll_to(selector, nav.as_ref());
        })?);
    }
    log::debug!("smooth scroll on {} links", listeners.len());
    Ok(listeners)
}

fn scroll_to(selector: &str, nav: Option<&NavPanel>) {
    let Ok(document) = dom::document() else {
        return;
    };
    let target = match document.query_selector(selector) {
        Ok(Some(target)) => target,
        Ok(None) => return,
        Err(err) => {
            log::warn!("ignoring link to invalid selector {selector:?}: {err:?}");
            return;
        }
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(nav) = nav {
        nav.close();
    }
}
