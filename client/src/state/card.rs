//! Per-card menu and action state.
//!
//! DESIGN
//! ======
//! The options menu and the right-click context menu are independent flags on
//! each card. Action callbacks are optional; [`fallback_acknowledgment`]
//! decides what happens when a card has no handler for an action.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// User-triggered card action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Save,
    Download,
    CopyLink,
}

impl CardAction {
    /// Menu label shown for the action.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Save => "Save to collections",
            Self::Download => "Download all screens",
            Self::CopyLink => "Copy link app",
        }
    }
}

/// Message shown when an action has no handler, `None` for a silent no-op.
#[must_use]
pub fn fallback_acknowledgment(action: CardAction) -> Option<&'static str> {
    match action {
        CardAction::Save => Some("Saved!!"),
        CardAction::Download | CardAction::CopyLink => None,
    }
}

/// Run `handler` when one is wired up; otherwise return the fallback message
/// the caller should surface to the user.
pub fn dispatch_action<F: FnOnce()>(action: CardAction, handler: Option<F>) -> Option<&'static str> {
    match handler {
        Some(run) => {
            run();
            None
        }
        None => fallback_acknowledgment(action),
    }
}

/// Options ("more") menu next to the save button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardMenuState {
    pub open: bool,
}

impl CardMenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// While the menu is open the action group stays visible without hover.
    #[must_use]
    pub fn actions_pinned(&self) -> bool {
        self.open
    }
}

/// Right-click menu anchored at the pointer position (viewport pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContextMenuState {
    pub open: bool,
    pub x: i32,
    pub y: i32,
}

impl ContextMenuState {
    pub fn open_at(&mut self, x: i32, y: i32) {
        self.open = true;
        self.x = x.max(0);
        self.y = y.max(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Inline style positioning the menu at the pointer.
    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}
