//! Cancellable `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::PortfolioError;

type FrameCallback = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct LoopState {
    request_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<FrameCallback>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), PortfolioError> {
        let window = crate::util::dom::window()?;
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| PortfolioError::js("requestAnimationFrame", &err))?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.request_id.take()
            && let Some(window) = web_sys::window()
        {
            if let Err(err) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        self.callback.borrow_mut().take();
    }
}

/// Runs `tick(timestamp_ms)` every animation frame until it breaks or the
/// loop is cancelled. Dropping the handle cancels.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    /// Schedule the first frame.
    ///
    /// # Errors
    ///
    /// Fails outside a browser or if the first frame cannot be requested.
    pub fn start(mut tick: impl FnMut(f64) -> ControlFlow<()> + 'static) -> Result<Self, PortfolioError> {
        let state = Rc::new(LoopState::default());
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |ts: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request_id.set(None);
            if state.stopped.get() {
                return;
            }
            if tick(ts).is_break() {
                state.stop();
                return;
            }
            if let Err(err) = state.schedule() {
                log::warn!("animation loop stopped: {err}");
                state.stop();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(callback);
        state.schedule()?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }

    pub fn cancel(&self) {
        self.state.stop();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
