//! Shared record model for the Airtable-backed browser.
//!
//! This crate owns the data shapes used by both `server` and `client`: the
//! upstream record/page types, slide resolution for carousel cards, the
//! feature dispatch tag for the card grid, and the image origin allow-list.
//!
//! The `source` feature adds the Airtable HTTP client and its environment
//! configuration. It pulls in `reqwest` and `tokio`, so only the server side
//! (and the client's SSR build) enable it.

pub mod feature;
pub mod origin;
pub mod record;
pub mod slides;

#[cfg(feature = "source")]
pub mod config;
#[cfg(feature = "source")]
pub mod source;

pub use feature::{Feature, FeatureLayout, GridItem, PLACEHOLDER_CARD_COUNT, grid_items};
pub use record::{Attachment, Record, RecordFields, RecordsPage};
pub use slides::resolve_slides;
