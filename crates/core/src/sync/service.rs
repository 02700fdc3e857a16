//! Calendar sync service - pushes extracted events to a remote calendar

use std::sync::Arc;

use chrono_tz::Tz;
use intrasync_domain::constants::{
    CALENDAR_DESCRIPTION, COLOR_PALETTE_SIZE, DEFAULT_COLOR_ID, GENERATOR_FOOTER,
};
use intrasync_domain::{CanonicalEvent, Result};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::ports::{CalendarProvider, EventQuery, RemoteEvent, RemoteEventDraft};

const DUPLICATE_REASON: &str = "Duplicate event found";

/// What happened to one event during a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SyncOutcome {
    Created { remote_id: String },
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEntry {
    pub event: CanonicalEvent,
    pub outcome: SyncOutcome,
}

/// Result of a sync run, one entry per attempted event in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub calendar_id: String,
    pub entries: Vec<SyncEntry>,
}

impl SyncReport {
    pub fn total_attempted(&self) -> usize {
        self.entries.len()
    }

    pub fn created_count(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Created { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Skipped { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&SyncOutcome) -> bool) -> usize {
        self.entries.iter().filter(|entry| predicate(&entry.outcome)).count()
    }
}

/// Calendar sync service
pub struct CalendarSyncService {
    provider: Arc<dyn CalendarProvider>,
    calendar_name: String,
    timezone: Tz,
}

impl CalendarSyncService {
    pub fn new(
        provider: Arc<dyn CalendarProvider>,
        calendar_name: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        Self { provider, calendar_name: calendar_name.into(), timezone }
    }

    /// Sync `events` into the named calendar, creating it when missing.
    ///
    /// Only calendar resolution errors are returned. Per-event failures are
    /// recorded in the report and the run continues.
    #[instrument(skip_all, fields(calendar = %self.calendar_name, events = events.len()))]
    pub async fn sync(&self, events: &[CanonicalEvent]) -> Result<SyncReport> {
        let calendar_id = self.ensure_calendar().await?;

        let mut entries = Vec::with_capacity(events.len());
        for event in events {
            let outcome = self.sync_event(&calendar_id, event).await;
            entries.push(SyncEntry { event: event.clone(), outcome });
        }

        let report = SyncReport { calendar_id, entries };
        info!(
            created = report.created_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            total = report.total_attempted(),
            "calendar sync finished"
        );
        Ok(report)
    }

    /// Id of the calendar named `calendar_name`, created on first use.
    pub async fn ensure_calendar(&self) -> Result<String> {
        let calendars = self.provider.list_calendars().await?;
        if let Some(calendar) = calendars.into_iter().find(|c| c.name == self.calendar_name) {
            debug!(calendar_id = %calendar.id, "found existing calendar");
            return Ok(calendar.id);
        }

        let created = self
            .provider
            .create_calendar(&self.calendar_name, CALENDAR_DESCRIPTION, self.timezone.name())
            .await?;
        info!(calendar_id = %created.id, "created calendar");
        Ok(created.id)
    }

    async fn sync_event(&self, calendar_id: &str, event: &CanonicalEvent) -> SyncOutcome {
        if self.is_duplicate(calendar_id, event).await {
            debug!(summary = %event.group, start = %event.start_time, "skipping duplicate event");
            return SyncOutcome::Skipped { reason: DUPLICATE_REASON.to_string() };
        }

        match self.provider.insert_event(calendar_id, &self.draft(event)).await {
            Ok(remote_id) => SyncOutcome::Created { remote_id },
            Err(error) => {
                warn!(%error, summary = %event.summary(), "failed to create remote event");
                SyncOutcome::Failed { error: error.to_string() }
            }
        }
    }

    /// A failed lookup counts as "not a duplicate".
    async fn is_duplicate(&self, calendar_id: &str, event: &CanonicalEvent) -> bool {
        let query = EventQuery {
            time_min: event.start_time,
            time_max: event.end_time,
            text: remote_summary(event),
        };
        match self.provider.search_events(calendar_id, &query).await {
            Ok(existing) => existing.iter().any(|remote| matches_event(remote, event)),
            Err(error) => {
                warn!(%error, "duplicate check failed, treating event as new");
                false
            }
        }
    }

    pub fn draft(&self, event: &CanonicalEvent) -> RemoteEventDraft {
        RemoteEventDraft {
            summary: remote_summary(event),
            location: event.location(),
            description: format!(
                "Activity: {}\nGroup: {}\nRoom: {}\n\n{GENERATOR_FOOTER}",
                event.activity, event.group, event.room
            ),
            start: event.start_time,
            end: event.end_time,
            timezone: self.timezone.name().to_string(),
            color_id: color_id(&event.group),
        }
    }
}

/// Remote events are titled by group alone.
fn remote_summary(event: &CanonicalEvent) -> String {
    event.group.clone()
}

fn matches_event(remote: &RemoteEvent, event: &CanonicalEvent) -> bool {
    remote.summary.as_deref() == Some(event.group.as_str())
        && remote.location.as_deref() == Some(event.location().as_str())
        && remote.start == Some(event.start_time)
        && remote.end == Some(event.end_time)
}

/// Palette slot for a group code: `G23` ⇒ 2, unparseable ⇒ 1.
pub fn color_id(group: &str) -> u8 {
    let number = group.replacen('G', "", 1);
    let digits: String = number.trim_start().chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(n) => (n % u64::from(COLOR_PALETTE_SIZE) + 1) as u8,
        Err(_) => DEFAULT_COLOR_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_cycles_through_palette() {
        assert_eq!(color_id("G23"), 2);
        assert_eq!(color_id("G0"), 1);
        assert_eq!(color_id("G10"), 11);
        assert_eq!(color_id("G11"), 1);
    }

    #[test]
    fn color_defaults_without_number() {
        assert_eq!(color_id(""), 1);
        assert_eq!(color_id("G"), 1);
        assert_eq!(color_id("Groupe A"), 1);
    }

    #[test]
    fn color_ignores_trailing_text() {
        assert_eq!(color_id("G5b"), 6);
    }
}
