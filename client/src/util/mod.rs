//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clipboard, alerts, viewport
//! size) and async cancellation from component logic so they stay testable.

pub mod browser;
pub mod cancel;
pub mod viewport;
