//! Mobile navigation: `#nav-toggle` opens and closes `#nav-links`.

use web_sys::Element;

use crate::config::ElementIds;
use crate::error::PortfolioError;
use crate::util::dom::{self, Listener};
use crate::util::nav::{OPEN_CLASS, icon_class};

/// The toggle button and the panel it controls.
#[derive(Clone)]
pub struct NavPanel {
    toggle: Element,
    links: Element,
}

impl NavPanel {
    pub fn is_open(&self) -> bool {
        self.links.class_list().contains(OPEN_CLASS)
    }

    /// Flip the panel and sync the icon.
    pub fn toggle(&self) {
        match self.links.class_list().toggle(OPEN_CLASS) {
            Ok(open) => self.sync_icon(open),
            Err(err) => log::warn!("nav toggle failed: {err:?}"),
        }
    }

    /// Close the panel if open.
    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        if let Err(err) = self.links.class_list().remove_1(OPEN_CLASS) {
            log::warn!("nav close failed: {err:?}");
            return;
        }
        self.sync_icon(false);
    }

    fn sync_icon(&self, open: bool) {
        if let Some(icon) = dom::query_in(&self.toggle, "i") {
            icon.set_class_name(icon_class(open));
        }
    }
}

pub struct NavMenu {
    panel: NavPanel,
    _click: Listener,
}

impl NavMenu {
    pub fn panel(&self) -> NavPanel {
        self.panel.clone()
    }
}

/// Bind the toggle. `Ok(None)` unless both elements exist.
///
/// # Errors
///
/// Fails if the click handler cannot be attached.
pub fn mount(ids: &ElementIds) -> Result<Option<NavMenu>, PortfolioError> {
    let (Some(toggle), Some(links)) = (dom::by_id(&ids.nav_toggle), dom::by_id(&ids.nav_links)) else {
        log::debug!("no #{} / #{}; mobile nav disabled", ids.nav_toggle, ids.nav_links);
        return Ok(None);
    };
    let panel = NavPanel { toggle, links };
    let panel_for_click = panel.clone();
    let click = Listener::new(&panel.toggle, "click", move |_| panel_for_click.toggle())?;
    Ok(Some(NavMenu { panel, _click: click }))
}
