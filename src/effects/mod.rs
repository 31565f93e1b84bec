//! Pure animation models.
//!
//! Nothing here touches the DOM, so every effect is unit-testable natively;
//! `components` binds them to elements and animation frames.

pub mod counter;
pub mod frame;
pub mod particles;
pub mod tilt;
