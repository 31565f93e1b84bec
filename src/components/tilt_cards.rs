//! Hover tilt for `[data-tilt]` cards.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config::TiltConfig;
use crate::effects::tilt::{Bounds, Tilt};
use crate::error::PortfolioError;
use crate::util::dom::{self, Listener};

pub const TILT_SELECTOR: &str = "[data-tilt]";

/// Attach tilt handlers to every flagged card. Returns the listeners (two per
/// card); an empty list means no cards.
///
/// # Errors
///
/// Fails if a handler cannot be attached.
pub fn mount(config: &TiltConfig) -> Result<Vec<Listener>, PortfolioError> {
    let mut listeners = Vec::new();
    for el in dom::query_all(TILT_SELECTOR)? {
        let Ok(card) = el.dyn_into::<HtmlElement>() else {
            continue;
        };
        let TiltConfig { max_degrees, perspective_px } = *config;

        let card_for_move = card.clone();
        listeners.push(Listener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = card_for_move.get_bounding_client_rect();
            let bounds = Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
            let tilt = Tilt::from_pointer(bounds, f64::from(event.client_x()), f64::from(event.client_y()), max_degrees);
            set_transform(&card_for_move, &tilt.css(perspective_px));
        })?);

        let card_for_leave = card.clone();
        listeners.push(Listener::new(&card, "mouseleave", move |_| {
            set_transform(&card_for_leave, &Tilt::default().css(perspective_px));
        })?);
    }
    log::debug!("tilt attached to {} cards", listeners.len() / 2);
    Ok(listeners)
}

fn set_transform(card: &HtmlElement, value: &str) {
    if let Err(err) = card.style().set_property("transform", value) {
        log::warn!("tilt transform failed: {err:?}");
    }
}
