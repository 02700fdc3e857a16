//! Page layout classification shared by the extractors.

use serde::{Deserialize, Serialize};

use crate::impl_label_conversions;

/// Language of the intranet page, detected once per extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl_label_conversions!(Language {
    En => "en",
    Fr => "fr",
});

/// Structural variant of the calendar page.
///
/// The intranet marks its multi-day grid with a `weeksview` class even though
/// the grid spans a whole month, so that markup maps to [`ViewType::Monthly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Daily,
    Monthly,
    #[default]
    Unknown,
}

impl_label_conversions!(ViewType {
    Daily => "daily",
    Monthly => "monthly",
    Unknown => "unknown",
});

/// Per-call layout facts, computed once and passed to every extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContext {
    pub language: Language,
    pub view_type: ViewType,
}

impl LayoutContext {
    pub const fn new(language: Language, view_type: ViewType) -> Self {
        Self { language, view_type }
    }

    /// Whether the page is one of the two supported layouts.
    pub const fn is_supported(&self) -> bool {
        !matches!(self.view_type, ViewType::Unknown)
    }
}
