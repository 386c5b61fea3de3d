//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads its route parameters and delegates rendering to
//! `components`.

pub mod browse;
pub mod records;
