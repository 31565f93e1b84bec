//! Linear count-up animation for statistic counters.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// One-shot animation from 0 to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: f64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self { target, duration_ms }
    }

    /// Parse a `data-counter` value. Surrounding whitespace is ignored;
    /// anything that is not a finite number is rejected.
    pub fn parse_target(raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }

    /// Fraction of the animation elapsed, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value at `elapsed_ms`. Halves round towards positive
    /// infinity, so `-0.5` shows as `0` and `-1.5` as `-1`.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        // `+ 0.0` folds `-0.0` so negative targets start at "0".
        (self.progress(elapsed_ms) * self.target + 0.5).floor() + 0.0
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Text written to the element at `elapsed_ms`.
    pub fn text_at(&self, elapsed_ms: f64) -> String {
        format!("{}", self.value_at(elapsed_ms))
    }
}
