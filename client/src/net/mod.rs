//! Networking modules for the record proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the browser-side calls to the server's JSON endpoints. Server
//! rendering reads records through the data source directly and never goes
//! through this module.

pub mod api;
