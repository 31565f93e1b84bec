//! Particle background bound to the `#galaxy` canvas.
//!
//! ARCHITECTURE
//! ============
//! [`ParticleField`] owns the simulation; this module only sizes the canvas,
//! throttles animation frames and paints. Colour comes from the injected
//! [`ThemeStore`] so the loop never reads document attributes.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::ops::ControlFlow;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::GalaxyConfig;
use crate::effects::frame::FrameThrottle;
use crate::effects::particles::ParticleField;
use crate::error::PortfolioError;
use crate::state::theme::{Theme, ThemeStore};
use crate::util::dom::{self, Listener};
use crate::util::frame_loop::AnimationLoop;

/// Running particle animation. Dropping it stops the loop and the resize
/// handler.
pub struct Galaxy {
    _resize: Listener,
    _animation: AnimationLoop,
}

/// Start the animation on `#canvas_id`. `Ok(None)` when the page has no such
/// canvas.
///
/// # Errors
///
/// Fails if the 2D context or the first animation frame is unavailable.
pub fn mount(canvas_id: &str, config: &GalaxyConfig, theme: ThemeStore) -> Result<Option<Galaxy>, PortfolioError> {
    let Some(canvas) = dom::typed_by_id::<HtmlCanvasElement>(canvas_id) else {
        log::debug!("no #{canvas_id} canvas; particles disabled");
        return Ok(None);
    };
    let ctx = context_2d(&canvas)?;
    let window = dom::window()?;

    let (width, height) = fit_to_viewport(&canvas, &window);
    let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(seed())));
    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particle_count,
        width,
        height,
        &mut *rng.borrow_mut(),
    )));

    let resize = {
        let canvas = canvas.clone();
        let window_for_cb = window.clone();
        let field = Rc::clone(&field);
        Listener::new(&window, "resize", move |_| {
            let (width, height) = fit_to_viewport(&canvas, &window_for_cb);
            field.borrow_mut().resize(width, height);
        })?
    };

    let mut throttle = FrameThrottle::new(config.target_fps);
    let dark = config.dark_color;
    let light = config.light_color;
    let animation = AnimationLoop::start(move |ts| {
        if !throttle.should_draw(ts) {
            return ControlFlow::Continue(());
        }
        let color = match theme.get() {
            Theme::Dark => dark,
            Theme::Light => light,
        };
        let mut field = field.borrow_mut();
        if let Err(err) = draw(&ctx, &field, |alpha| color.with_alpha(alpha)) {
            log::warn!("particle draw failed: {err:?}");
        }
        field.step(&mut *rng.borrow_mut());
        ControlFlow::Continue(())
    })?;

    log::debug!("particles running on #{canvas_id} ({width}x{height})");
    Ok(Some(Galaxy { _resize: resize, _animation: animation }))
}

/// Paint one frame: clear, then a filled circle per particle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, fill: impl Fn(f64) -> String) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    for p in field.particles() {
        ctx.begin_path();
        ctx.set_fill_style_str(&fill(p.z));
        ctx.arc(p.x, p.y, p.radius(), 0.0, 2.0 * PI)?;
        ctx.fill();
    }
    Ok(())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, PortfolioError> {
    let context = canvas
        .get_context("2d")
        .map_err(|err| PortfolioError::js("getContext", &err))?
        .ok_or(PortfolioError::Js { context: "getContext", message: "2d context unavailable".to_owned() })?;
    context
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|value| PortfolioError::js("getContext", &value))
}

/// Size the canvas backing store to the viewport; returns the new size.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fit_to_viewport(canvas: &HtmlCanvasElement, window: &web_sys::Window) -> (f64, f64) {
    let (width, height) = dom::viewport_size(window);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
    (f64::from(canvas.width()), f64::from(canvas.height()))
}

fn seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}
