//! Fixed-delay lookup retry for elements that may be injected after parsing.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

/// What to do after a lookup came back empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retry {
    pub delay_ms: u32,
    /// Only the first miss is worth a warning; later ones log at debug.
    pub announce: bool,
}

/// Unbounded poll at a fixed delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementPoll {
    delay_ms: u32,
    misses: u32,
}

impl ElementPoll {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, misses: 0 }
    }

    /// Record a failed lookup and schedule the next one.
    pub fn miss(&mut self) -> Retry {
        self.misses = self.misses.saturating_add(1);
        Retry { delay_ms: self.delay_ms, announce: self.misses == 1 }
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }
}
