//! Canonical schedule event emitted by the extraction pipeline.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::layout::Language;

/// One class-schedule event, normalized from a single DOM element.
///
/// Instances only exist once the validity gate has passed: group and course
/// are non-empty, both instants are set and the room is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEvent {
    pub group: String,
    pub course: String,
    #[serde(default)]
    pub activity: String,
    pub room: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Cleaned element text, kept for diagnostics.
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub language: Language,
}

impl CanonicalEvent {
    /// `"{group} - {course}"`, the title used in exported calendars.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.group, self.course)
    }

    /// `"Room {room}"`, the location string shared by export and sync.
    pub fn location(&self) -> String {
        format!("Room {}", self.room)
    }

    /// Activity label, or `None` when the page did not provide one.
    pub fn activity_label(&self) -> Option<&str> {
        let trimmed = self.activity.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}
