//! Single-value holder for state that lives as long as the page.

use std::cell::RefCell;

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

/// Holds at most one value. Meant for a `thread_local!` so mounted behaviors
/// outlive the call that created them.
pub struct PageSlot<T> {
    value: RefCell<Option<T>>,
}

impl<T> PageSlot<T> {
    pub const fn new() -> Self {
        Self { value: RefCell::new(None) }
    }

    /// Store `value`, returning the previous one. The slot is not borrowed
    /// while the caller drops what comes back.
    #[must_use]
    pub fn replace(&self, value: T) -> Option<T> {
        self.value.borrow_mut().replace(value)
    }

    #[must_use]
    pub fn take(&self) -> Option<T> {
        self.value.borrow_mut().take()
    }

    pub fn is_occupied(&self) -> bool {
        self.value.borrow().is_some()
    }

    /// Run `f` against the stored value, if any.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.value.borrow().as_ref().map(f)
    }
}

impl<T> Default for PageSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
