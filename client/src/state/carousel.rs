//! Carousel navigation state for a single card.
//!
//! DESIGN
//! ======
//! Every navigation event funnels through [`CarouselState::select`], which
//! recomputes the 1-based position and both boundary flags. Controls read the
//! flags to render as inert at the ends; they are never hidden.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Display cap for position indicator dots.
pub const MAX_INDICATORS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    /// 1-based position of the selected slide; 0 only when there are no slides.
    pub current: usize,
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
    total: usize,
}

impl CarouselState {
    /// State for `total` slides with the first slide selected.
    #[must_use]
    pub fn new(total: usize) -> Self {
        let mut state = Self { current: 0, can_scroll_prev: false, can_scroll_next: false, total };
        state.select(0);
        state
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// 0-based index of the selected slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.current.saturating_sub(1)
    }

    /// Jump to slide `index`, clamped to the last slide.
    pub fn select(&mut self, index: usize) {
        if self.total == 0 {
            return;
        }
        let index = index.min(self.total - 1);
        self.current = index + 1;
        self.can_scroll_prev = index > 0;
        self.can_scroll_next = index < self.total - 1;
    }

    pub fn next(&mut self) {
        if self.can_scroll_next {
            self.select(self.index() + 1);
        }
    }

    pub fn prev(&mut self) {
        if self.can_scroll_prev {
            self.select(self.index() - 1);
        }
    }

    /// Prev/next controls and indicators only exist for multi-slide cards.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.total > 1
    }

    #[must_use]
    pub fn indicator_count(&self) -> usize {
        if self.has_controls() { self.total.min(MAX_INDICATORS) } else { 0 }
    }

    #[must_use]
    pub fn is_indicator_active(&self, dot: usize) -> bool {
        self.current == dot + 1
    }
}
