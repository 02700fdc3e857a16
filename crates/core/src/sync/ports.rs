//! Port interfaces for remote calendar sync

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use intrasync_domain::Result;
use serde::{Deserialize, Serialize};

/// A calendar visible to the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCalendar {
    pub id: String,
    pub name: String,
}

/// An event already stored in a remote calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEvent {
    pub id: String,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Payload for a new remote event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEventDraft {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA zone name sent with both instants.
    pub timezone: String,
    pub color_id: u8,
}

/// Search window and text for the duplicate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub text: String,
}

/// Trait for remote calendar provider operations
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// List calendars owned by or shared with the account
    async fn list_calendars(&self) -> Result<Vec<RemoteCalendar>>;

    /// Create a calendar and return it with its assigned id
    async fn create_calendar(
        &self,
        name: &str,
        description: &str,
        timezone: &str,
    ) -> Result<RemoteCalendar>;

    /// Find events in a calendar matching the query
    async fn search_events(
        &self,
        calendar_id: &str,
        query: &EventQuery,
    ) -> Result<Vec<RemoteEvent>>;

    /// Insert an event and return its remote id
    async fn insert_event(&self, calendar_id: &str, draft: &RemoteEventDraft) -> Result<String>;
}
