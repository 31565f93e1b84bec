//! Helpers shared across behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `anchor`, `contact`, `nav` and `poll` are pure and unit-tested natively.
//! `dom` and `frame_loop` wrap web-sys and only exist under the `hydrate`
//! feature.

pub mod anchor;
pub mod contact;
pub mod nav;
pub mod poll;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
