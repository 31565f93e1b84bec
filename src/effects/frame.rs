//! Redraw throttling for animation-frame driven loops.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// Caps redraws at a target rate. Callers still reschedule every frame; this
/// only decides whether the frame does any work.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_ms: f64,
}

impl FrameThrottle {
    /// Throttle to `fps` redraws per second. Non-positive rates never throttle.
    pub fn new(fps: f64) -> Self {
        let interval_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };
        Self { interval_ms, last_ms: 0.0 }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a frame stamped `now_ms` should redraw. Records the stamp when
    /// it does.
    pub fn should_draw(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_ms < self.interval_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }
}
