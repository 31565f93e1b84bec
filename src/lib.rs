//! # portfolio
//!
//! Client-side interaction layer for the portfolio page, compiled to
//! WebAssembly. The server ships static markup; this crate attaches the
//! behaviors to it:
//!
//! | Behavior | Model | DOM binding |
//! |----------|-------|-------------|
//! | particle background | [`effects::particles`], [`effects::frame`] | `components::galaxy` |
//! | light/dark theme | [`state::theme`] | `components::theme_toggle` |
//! | count-up statistics | [`effects::counter`] | `components::counters` |
//! | card tilt | [`effects::tilt`] | `components::tilt_cards` |
//! | mobile navigation | [`util::nav`] | `components::nav_menu` |
//! | smooth scrolling | [`util::anchor`] | `components::smooth_scroll` |
//! | contact form | [`util::contact`] | `components::contact_form` |
//!
//! Models are plain Rust and build everywhere. DOM bindings and the exported
//! `mount()` entry point need the `hydrate` feature.

pub mod config;
pub mod effects;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;
