//! Feature tag for the card grid.
//!
//! DESIGN
//! ======
//! The route segment selecting a grid category is parsed once into a closed
//! enum. Rendering matches on [`FeatureLayout`], so the placeholder and empty
//! branches are explicit and `flows` is a declared alias of `apps`.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;

/// Number of placeholder cards rendered for features without real data.
pub const PLACEHOLDER_CARD_COUNT: usize = 10;

/// Content category selected by the browse route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feature {
    #[default]
    Apps,
    Screens,
    UiElements,
    Flows,
    Unknown,
}

/// What the grid renders for a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureLayout {
    /// One carousel card per fetched record.
    RecordCards,
    /// A fixed number of placeholder cards; fetched records are ignored.
    Placeholders(usize),
    /// Nothing at all.
    Nothing,
}

/// One cell of the rendered grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridItem<'a> {
    Card(&'a Record),
    Placeholder(usize),
}

impl Feature {
    /// Parse a route segment. Anything unrecognized maps to [`Feature::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "apps" => Self::Apps,
            "screens" => Self::Screens,
            "ui-elements" => Self::UiElements,
            "flows" => Self::Flows,
            _ => Self::Unknown,
        }
    }

    /// Route segment for this feature, `None` for [`Feature::Unknown`].
    #[must_use]
    pub fn as_segment(self) -> Option<&'static str> {
        match self {
            Self::Apps => Some("apps"),
            Self::Screens => Some("screens"),
            Self::UiElements => Some("ui-elements"),
            Self::Flows => Some("flows"),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn layout(self) -> FeatureLayout {
        match self {
            // Flows share the apps rendering.
            Self::Apps | Self::Flows => FeatureLayout::RecordCards,
            Self::Screens | Self::UiElements => FeatureLayout::Placeholders(PLACEHOLDER_CARD_COUNT),
            Self::Unknown => FeatureLayout::Nothing,
        }
    }

    /// Whether rendering this feature needs the fetched records at all.
    #[must_use]
    pub fn uses_records(self) -> bool {
        matches!(self.layout(), FeatureLayout::RecordCards)
    }
}

/// Build the ordered grid cells for `feature` over `records`.
#[must_use]
pub fn grid_items(feature: Feature, records: &[Record]) -> Vec<GridItem<'_>> {
    match feature.layout() {
        FeatureLayout::RecordCards => records.iter().map(GridItem::Card).collect(),
        FeatureLayout::Placeholders(count) => (0..count).map(GridItem::Placeholder).collect(),
        FeatureLayout::Nothing => Vec::new(),
    }
}
