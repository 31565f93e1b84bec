//! Application state shared across behaviors.

pub mod slot;
pub mod theme;
