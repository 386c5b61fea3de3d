//! UI component modules used by the browse and records pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are grouped by surface: the card grid and its cards, the
//! per-card context menu, and the plain records list.

pub mod cards_list;
pub mod carousel_card;
pub mod context_menu;
pub mod placeholder_card;
pub mod records_list;
