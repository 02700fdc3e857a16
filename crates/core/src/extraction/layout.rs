//! Page layout detection
//!
//! Runs once per extraction call. The result is threaded through every
//! extractor as a [`LayoutContext`] value.

use intrasync_domain::constants::FRENCH_PAGE_MARKER;
use intrasync_domain::{Language, LayoutContext, ViewType};

use crate::dom::{DomDocument, DomNode};

pub const CALENDAR_CONTAINER: &str = ".calendar.planner";
const DAYS_VIEW_CLASS: &str = "daysview";
const WEEKS_VIEW_CLASS: &str = "weeksview";

/// French when the French-only management link appears anywhere on the page.
pub fn detect_language(page_text: &str) -> Language {
    if page_text.contains(FRENCH_PAGE_MARKER) {
        Language::Fr
    } else {
        Language::En
    }
}

/// Classifies the calendar container found under `root`.
pub fn detect_view_type<N: DomNode>(root: &N) -> ViewType {
    match root.query(CALENDAR_CONTAINER) {
        Some(calendar) if calendar.has_class(DAYS_VIEW_CLASS) => ViewType::Daily,
        Some(calendar) if calendar.has_class(WEEKS_VIEW_CLASS) => ViewType::Monthly,
        _ => ViewType::Unknown,
    }
}

pub fn detect_layout<D: DomDocument>(document: &D) -> LayoutContext {
    LayoutContext::new(detect_language(&document.body_text()), detect_view_type(&document.root()))
}
