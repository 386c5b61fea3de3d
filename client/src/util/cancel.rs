//! Cancellation flag for async work owned by a component.
//!
//! DESIGN
//! ======
//! A component that spawns a request keeps one clone and hands another to the
//! task. Cleanup flips the flag; the task checks it right before writing its
//! result, so a late response never lands in state that belongs to an
//! unmounted view.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Run `write` unless the token was cancelled. Returns whether it ran.
    pub fn deliver<F: FnOnce()>(&self, write: F) -> bool {
        if self.is_cancelled() {
            return false;
        }
        write();
        true
    }
}
