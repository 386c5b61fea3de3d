//! Viewport-driven UI state shared by every card.
//!
//! DESIGN
//! ======
//! Below the breakpoint a card renders its first slide as a static image and
//! never mounts the carousel. That is a different component tree, not a
//! styling variant, so the choice lives in state rather than CSS.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// Minimum viewport width (CSS px) at which the interactive carousel mounts.
pub const CAROUSEL_BREAKPOINT_PX: f64 = 768.0;

/// Render path for cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardLayout {
    /// First slide only, as a static image.
    #[default]
    Compact,
    /// Interactive carousel with controls.
    Carousel,
}

impl CardLayout {
    #[must_use]
    pub fn for_viewport_width(width: f64) -> Self {
        if width >= CAROUSEL_BREAKPOINT_PX { Self::Carousel } else { Self::Compact }
    }
}

/// UI state provided through context from the app root.
///
/// Starts in the compact layout so server-rendered HTML matches the first
/// hydrated frame; the real width is applied once the browser reports it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub layout: CardLayout,
    pub viewport_width: Option<f64>,
}

impl UiState {
    /// Record a viewport width and derive the layout from it.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = Some(width);
        self.layout = CardLayout::for_viewport_width(width);
    }
}

/// Layout derived from the shared UI signal, or compact when no signal is
/// provided. Only notifies readers when the layout itself changes, so width
/// updates inside one breakpoint leave mounted carousels alone.
pub fn layout_memo(ui: Option<RwSignal<UiState>>) -> Memo<CardLayout> {
    Memo::new(move |_| ui.map_or(CardLayout::Compact, |ui| ui.with(|u| u.layout)))
}

/// What a card's media area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardMedia {
    /// Neutral block: the record resolved to zero slides.
    Fallback,
    /// One static image.
    Static(String),
    /// Interactive carousel over every slide.
    Carousel(Vec<String>),
}

impl CardMedia {
    /// Compact layouts and single-slide cards get a static first slide; the
    /// carousel only mounts for several slides on a wide viewport.
    #[must_use]
    pub fn select(layout: CardLayout, slides: &[String]) -> Self {
        match (layout, slides) {
            (_, []) => Self::Fallback,
            (CardLayout::Carousel, [_, _, ..]) => Self::Carousel(slides.to_vec()),
            (_, [first, ..]) => Self::Static(first.clone()),
        }
    }
}
