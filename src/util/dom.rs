//! Thin web-sys helpers shared by the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every closure handed to the browser is owned by a [`Listener`], so a
//! component releases its handlers by dropping its handle instead of leaking
//! them with `Closure::forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::PortfolioError;

pub fn window() -> Result<Window, PortfolioError> {
    web_sys::window().ok_or(PortfolioError::NoBrowser)
}

pub fn document() -> Result<Document, PortfolioError> {
    window()?.document().ok_or(PortfolioError::NoBrowser)
}

/// Element with `id`, or `None` when absent (or outside a browser).
pub fn by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Element with `id` cast to `T`. Absent or differently-typed elements yield
/// `None`.
pub fn typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    match by_id(id)?.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(el) => {
            log::warn!("#{id} is a <{}>, not the expected element type", el.tag_name().to_lowercase());
            None
        }
    }
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Fails if the selector is invalid.
pub fn query_all(selector: &str) -> Result<Vec<Element>, PortfolioError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|err| PortfolioError::js("querySelectorAll", &err))?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    Ok(out)
}

/// First `selector` match under `root`; invalid selectors log and yield `None`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("querySelector({selector:?}) failed: {err:?}");
            None
        }
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {err:?}");
    }
}

/// Attached event handler; detaches on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Fails if the browser rejects the registration.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PortfolioError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| PortfolioError::js("addEventListener", &err))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("removeEventListener({}) failed: {err:?}", self.event);
        }
    }
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately when parsing is already done; otherwise waits for
/// `DOMContentLoaded`. The returned listener must be kept alive until then.
///
/// # Errors
///
/// Fails outside a browser or if the listener cannot be attached.
pub fn on_ready(f: impl FnOnce() + 'static) -> Result<Option<Listener>, PortfolioError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(None);
    }
    let mut pending = Some(f);
    let listener = Listener::new(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })?;
    Ok(Some(listener))
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("viewport size unavailable: {err:?}");
            0.0
        }
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}
