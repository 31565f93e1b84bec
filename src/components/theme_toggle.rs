//! Theme toggle button (`#theme-toggle`) and the `<html data-theme>` mirror.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::ThemeConfig;
use crate::error::PortfolioError;
use crate::state::theme::{Subscription, Theme, ThemeStore};
use crate::util::dom::{self, Listener};
use crate::util::poll::ElementPoll;

/// Attribute on the root element that the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Current `data-theme` of the root element, used as the fallback preference.
pub fn page_attribute() -> Option<String> {
    web_sys::window()?.document()?.document_element()?.get_attribute(THEME_ATTRIBUTE)
}

/// Write `theme` to the root element.
pub fn apply(theme: Theme) {
    let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
        return;
    };
    if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("setting {THEME_ATTRIBUTE} failed: {err:?}");
    }
}

fn render_button(button: &Element, theme: Theme) {
    if let Some(icon) = dom::query_in(button, "i") {
        icon.set_class_name(theme.icon_class());
    }
    if let Some(label) = dom::query_in(button, "span") {
        label.set_text_content(Some(theme.label()));
    }
}

struct Bound {
    _click: Listener,
    _subscription: Subscription,
}

/// Lookup state shared between the readiness callback and the retry timer.
struct Search {
    toggle_id: String,
    store: ThemeStore,
    poll: RefCell<ElementPoll>,
    pending: RefCell<Option<Timeout>>,
    bound: RefCell<Option<Bound>>,
}

/// Toggle wiring. The first lookup happens once the document is ready and
/// repeats every `retry_ms` until the button exists. Dropping the handle
/// detaches everything, including a pending readiness wait or retry.
pub struct ThemeToggle {
    _ready: Option<Listener>,
    search: Rc<Search>,
}

impl ThemeToggle {
    pub fn is_bound(&self) -> bool {
        self.search.bound.borrow().is_some()
    }
}

/// Apply the stored theme now and bind `#toggle_id` as soon as it exists.
///
/// # Errors
///
/// Fails outside a browser.
pub fn mount(toggle_id: &str, store: ThemeStore, config: &ThemeConfig) -> Result<ThemeToggle, PortfolioError> {
    apply(store.get());

    let search = Rc::new(Search {
        toggle_id: toggle_id.to_owned(),
        store,
        poll: RefCell::new(ElementPoll::new(config.retry_ms)),
        pending: RefCell::new(None),
        bound: RefCell::new(None),
    });
    let weak = Rc::downgrade(&search);
    let ready = dom::on_ready(move || {
        if let Some(search) = weak.upgrade() {
            attempt(&search);
        }
    })?;
    Ok(ThemeToggle { _ready: ready, search })
}

fn attempt(search: &Rc<Search>) {
    match bind(&search.toggle_id, search.store.clone()) {
        Ok(Some(bound)) => {
            let misses = search.poll.borrow().misses();
            log::debug!("#{} bound after {misses} retries", search.toggle_id);
            *search.bound.borrow_mut() = Some(bound);
        }
        Ok(None) => {
            let retry = search.poll.borrow_mut().miss();
            if retry.announce {
                log::warn!("no #{} yet; retrying every {}ms", search.toggle_id, retry.delay_ms);
            }
            let weak = Rc::downgrade(search);
            let timeout = Timeout::new(retry.delay_ms, move || {
                if let Some(search) = weak.upgrade() {
                    attempt(&search);
                }
            });
            *search.pending.borrow_mut() = Some(timeout);
        }
        Err(err) => log::warn!("theme toggle: {err}"),
    }
}

fn bind(toggle_id: &str, store: ThemeStore) -> Result<Option<Bound>, PortfolioError> {
    let Some(button) = dom::by_id(toggle_id) else {
        return Ok(None);
    };
    render_button(&button, store.get());

    let button_for_sub = button.clone();
    let subscription = store.subscribe(move |theme| {
        apply(theme);
        render_button(&button_for_sub, theme);
    });

    let click = Listener::new(&button, "click", move |event| {
        event.prevent_default();
        store.toggle();
    })?;

    Ok(Some(Bound { _click: click, _subscription: subscription }))
}
