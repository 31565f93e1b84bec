//! DOM bindings, one module per page behavior.
//!
//! ARCHITECTURE
//! ============
//! Each `mount` looks up its elements, attaches handlers and returns an owning
//! handle. A missing element disables that behavior only; nothing here talks
//! to another component except through the handles `app::mount` passes along.

pub mod contact_form;
pub mod counters;
pub mod galaxy;
pub mod nav_menu;
pub mod smooth_scroll;
pub mod theme_toggle;
pub mod tilt_cards;
