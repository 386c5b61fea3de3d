//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`carousel`, `card`, `records_list`, `ui`) so
//! components depend on small focused models that are testable without a
//! browser.

pub mod card;
pub mod carousel;
pub mod records_list;
pub mod ui;
