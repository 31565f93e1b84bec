//! `#contact-form` submit handler: validate, then hand off to `mailto:`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::{ContactConfig, ElementIds};
use crate::error::PortfolioError;
use crate::util::contact::{ContactFields, Submission, submit};
use crate::util::dom::{self, Listener};

/// Submit handler plus the pending confirmation, if any. Dropping it detaches
/// the handler and cancels a confirmation that has not fired yet.
pub struct ContactForm {
    _submit: Listener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

/// Bind the submit handler. `Ok(None)` when the page has no contact form.
///
/// # Errors
///
/// Fails if the handler cannot be attached.
pub fn mount(ids: &ElementIds, config: &ContactConfig) -> Result<Option<ContactForm>, PortfolioError> {
    let Some(form) = dom::typed_by_id::<HtmlFormElement>(&ids.contact_form) else {
        log::debug!("no #{}; contact form disabled", ids.contact_form);
        return Ok(None);
    };

    let pending = Rc::new(RefCell::new(None::<Timeout>));
    let pending_cb = Rc::clone(&pending);
    let ids = ids.clone();
    let config = config.clone();
    let form_for_submit = form.clone();
    let listener = Listener::new(&form, "submit", move |event| {
        event.prevent_default();
        let fields = read_fields(&ids);
        match submit(&fields, &config) {
            Submission::Rejected(err) => dom::alert(&err.to_string()),
            Submission::Accepted { mailto, confirmation } => {
                open_mail_client(&mailto);
                let form = form_for_submit.clone();
                let timeout = Timeout::new(config.confirmation_delay_ms, move || {
                    dom::alert(&confirmation);
                    form.reset();
                });
                *pending_cb.borrow_mut() = Some(timeout);
            }
        }
    })?;

    Ok(Some(ContactForm { _submit: listener, _pending: pending }))
}

fn read_fields(ids: &ElementIds) -> ContactFields {
    ContactFields {
        name: field_value(&ids.name),
        email: field_value(&ids.email),
        subject: field_value(&ids.subject),
        message: field_value(&ids.message),
    }
}

/// Value of an `<input>` or `<textarea>`; empty when missing.
fn field_value(id: &str) -> String {
    let Some(el) = dom::by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn open_mail_client(mailto: &str) {
    let Ok(window) = dom::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(mailto) {
        log::warn!("opening mail client failed: {err:?}");
    }
}
