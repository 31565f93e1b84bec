//! Count-up statistics (`[data-counter]`) started when scrolled into view.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::CounterConfig;
use crate::effects::counter::CounterAnimation;
use crate::error::PortfolioError;
use crate::util::dom;
use crate::util::frame_loop::AnimationLoop;

pub const COUNTER_SELECTOR: &str = "[data-counter]";
const COUNTER_ATTRIBUTE: &str = "data-counter";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observer plus any counters still animating. Dropping it disconnects the
/// observer and stops running animations.
pub struct Counters {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    running: Rc<RefCell<Vec<AnimationLoop>>>,
}

impl Drop for Counters {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.running.borrow_mut().clear();
    }
}

/// Observe every counter on the page. `Ok(None)` when there are none.
///
/// # Errors
///
/// Fails if the observer cannot be created.
pub fn mount(config: &CounterConfig) -> Result<Option<Counters>, PortfolioError> {
    let elements = dom::query_all(COUNTER_SELECTOR)?;
    if elements.is_empty() {
        log::debug!("no counters on page");
        return Ok(None);
    }

    let running = Rc::new(RefCell::new(Vec::new()));
    let running_cb = Rc::clone(&running);
    let duration_ms = config.duration_ms;
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let el = entry.target();
            observer.unobserve(&el);
            match start(&el, duration_ms) {
                Ok(Some(anim)) => {
                    let mut running = running_cb.borrow_mut();
                    running.retain(AnimationLoop::is_running);
                    running.push(anim);
                }
                Ok(None) => {}
                Err(err) => log::warn!("counter animation: {err}"),
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| PortfolioError::js("IntersectionObserver", &err))?;
    for el in &elements {
        observer.observe(el);
    }

    log::debug!("observing {} counters", elements.len());
    Ok(Some(Counters { observer, _callback: callback, running }))
}

fn start(el: &Element, duration_ms: f64) -> Result<Option<AnimationLoop>, PortfolioError> {
    let raw = el.get_attribute(COUNTER_ATTRIBUTE).unwrap_or_default();
    let Some(target) = CounterAnimation::parse_target(&raw) else {
        log::warn!("skipping counter with non-numeric target {raw:?}");
        return Ok(None);
    };
    let anim = CounterAnimation::new(target, duration_ms);
    let el = el.clone();
    let started_ms = now_ms();
    let animation = AnimationLoop::start(move |ts| {
        let elapsed = ts - started_ms;
        el.set_text_content(Some(&anim.text_at(elapsed)));
        if anim.is_finished(elapsed) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    Ok(Some(animation))
}

/// `performance.now()`, the clock animation-frame timestamps share.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}
