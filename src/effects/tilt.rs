//! Pointer-driven 3D tilt for cards.
//!
//! The pointer position inside the card's bounding box maps linearly onto a
//! rotation pair: centre is flat, edges reach `±max_degrees`.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Bounding box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees around each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Rotation for a pointer at (`client_x`, `client_y`) over `bounds`.
    ///
    /// Horizontal offset drives `rotate_y` (+ to the right), vertical offset
    /// drives `rotate_x` (+ towards the top). Degenerate boxes stay flat.
    pub fn from_pointer(bounds: Bounds, client_x: f64, client_y: f64, max_degrees: f64) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::default();
        }
        let nx = (client_x - bounds.left) / bounds.width;
        let ny = (client_y - bounds.top) / bounds.height;
        let span = max_degrees * 2.0;
        // `+ 0.0` keeps the centre at "0deg" rather than "-0deg".
        Self {
            rotate_x: (ny - 0.5) * -span + 0.0,
            rotate_y: (nx - 0.5) * span + 0.0,
        }
    }

    /// CSS `transform` value for this tilt.
    pub fn css(&self, perspective_px: f64) -> String {
        format!(
            "perspective({perspective_px}px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}
