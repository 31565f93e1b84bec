//! Entry points exported to the page.

use wasm_bindgen::prelude::*;

use crate::components::contact_form::{self, ContactForm};
use crate::components::counters::{self, Counters};
use crate::components::galaxy::{self, Galaxy};
use crate::components::nav_menu::{self, NavMenu};
use crate::components::smooth_scroll;
use crate::components::theme_toggle::{self, ThemeToggle};
use crate::components::tilt_cards;
use crate::config::PortfolioConfig;
use crate::error::PortfolioError;
use crate::state::slot::PageSlot;
use crate::state::theme::{LocalStorage, Theme, ThemeStore};
use crate::util::dom::{self, Listener};

thread_local! {
    /// Behaviors attached to the page. They stay alive until [`teardown`].
    static MOUNTED: PageSlot<PortfolioHandle> = const { PageSlot::new() };
    /// Readiness listener for the automatic mount, while the page is parsing.
    static PENDING_MOUNT: PageSlot<Listener> = const { PageSlot::new() };
}

/// Install the panic hook and console logger, then mount once the document is
/// parsed. Runs when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
    log::set_max_level(PortfolioConfig::default().log_level().to_level_filter());

    match dom::on_ready(mount_on_ready) {
        Ok(Some(listener)) => PENDING_MOUNT.with(|slot| drop(slot.replace(listener))),
        Ok(None) => {}
        Err(err) => log::error!("automatic mount not scheduled: {err}"),
    }
}

fn mount_on_ready() {
    if let Err(err) = mount_page() {
        log::error!("mount failed: {err}");
    }
}

/// Everything [`mount`] attached. Dropping it stops the animations and
/// removes every handler.
pub struct PortfolioHandle {
    theme: ThemeStore,
    _toggle: ThemeToggle,
    _galaxy: Option<Galaxy>,
    _counters: Option<Counters>,
    _tilt: Vec<Listener>,
    _nav: Option<NavMenu>,
    _scroll: Vec<Listener>,
    _contact: Option<ContactForm>,
}

impl PortfolioHandle {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }
}

/// Attach every behavior to the current page for the rest of its lifetime.
/// Mounting again replaces what an earlier mount attached.
///
/// # Errors
///
/// Fails outside a browser or when the browser refuses a handler; behaviors
/// whose elements are missing are skipped, not errors.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    Ok(mount_page()?)
}

fn mount_page() -> Result<(), PortfolioError> {
    drop(PENDING_MOUNT.with(PageSlot::take));
    // Detach the previous mount before binding the same elements again.
    if MOUNTED.with(PageSlot::is_occupied) {
        log::debug!("replacing previous mount");
    }
    drop(MOUNTED.with(PageSlot::take));

    let config = PortfolioConfig::load();
    log::set_max_level(config.log_level().to_level_filter());
    let handle = mount_with(&config)?;
    drop(MOUNTED.with(|slot| slot.replace(handle)));
    Ok(())
}

/// Stop the animations and detach every handler. A later [`mount`] starts
/// over.
#[wasm_bindgen]
pub fn teardown() {
    drop(PENDING_MOUNT.with(PageSlot::take));
    if let Some(handle) = MOUNTED.with(PageSlot::take) {
        log::info!("portfolio torn down (theme {})", handle.theme().as_str());
    }
}

/// Current theme, `"dark"` or `"light"`, or `None` while nothing is mounted.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    MOUNTED.with(|slot| slot.with(|handle| handle.theme().as_str().to_owned()))
}

/// [`mount`] with an explicit configuration.
///
/// # Errors
///
/// See [`mount`].
pub fn mount_with(config: &PortfolioConfig) -> Result<PortfolioHandle, PortfolioError> {
    let ids = &config.ids;
    let attribute = theme_toggle::page_attribute();
    let theme = ThemeStore::load(LocalStorage, &config.theme.storage_key, attribute.as_deref());

    let toggle = theme_toggle::mount(&ids.theme_toggle, theme.clone(), &config.theme)?;
    let galaxy = galaxy::mount(&ids.canvas, &config.galaxy, theme.clone())?;
    let counters = counters::mount(&config.counter)?;
    let tilt = tilt_cards::mount(&config.tilt)?;
    let nav = nav_menu::mount(ids)?;
    let scroll = smooth_scroll::mount(nav.as_ref().map(NavMenu::panel))?;
    let contact = contact_form::mount(ids, &config.contact)?;

    log::info!(
        "portfolio mounted: theme={} toggle={} particles={} counters={} tilt_cards={} nav={} links={} contact={}",
        theme.get().as_str(),
        toggle.is_bound(),
        galaxy.is_some(),
        counters.is_some(),
        tilt.len() / 2,
        nav.is_some(),
        scroll.len(),
        contact.is_some(),
    );

    Ok(PortfolioHandle {
        theme,
        _toggle: toggle,
        _galaxy: galaxy,
        _counters: counters,
        _tilt: tilt,
        _nav: nav,
        _scroll: scroll,
        _contact: contact,
    })
}
