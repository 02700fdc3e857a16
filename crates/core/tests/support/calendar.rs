use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use intrasync_core::sync::{
    CalendarProvider, EventQuery, RemoteCalendar, RemoteEvent, RemoteEventDraft,
};
use intrasync_domain::{IntraSyncError, Result as DomainResult};

/// In-memory mock for `CalendarProvider`.
///
/// Keeps calendars and inserted events in memory. Search returns every stored
/// event of the calendar overlapping the query window whose summary contains
/// the query text, like the remote API's free-text search.
#[derive(Default, Clone)]
pub struct MockCalendarProvider {
    calendars: Arc<Mutex<Vec<RemoteCalendar>>>,
    events: Arc<Mutex<Vec<(String, RemoteEvent)>>>,
    drafts: Arc<Mutex<Vec<RemoteEventDraft>>>,
    fail_search: bool,
    fail_insert_for: Option<String>,
    fail_list: bool,
}

impl MockCalendarProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendar(self, id: &str, name: &str) -> Self {
        self.calendars.lock().unwrap().push(RemoteCalendar { id: id.into(), name: name.into() });
        self
    }

    pub fn with_event(self, calendar_id: &str, event: RemoteEvent) -> Self {
        self.events.lock().unwrap().push((calendar_id.into(), event));
        self
    }

    /// Every duplicate search returns an error.
    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Inserting an event with this summary returns an error.
    pub fn failing_insert_for(mut self, summary: &str) -> Self {
        self.fail_insert_for = Some(summary.into());
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn calendars(&self) -> Vec<RemoteCalendar> {
        self.calendars.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<RemoteEventDraft> {
        self.drafts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarProvider for MockCalendarProvider {
    async fn list_calendars(&self) -> DomainResult<Vec<RemoteCalendar>> {
        if self.fail_list {
            return Err(IntraSyncError::Auth("token expired".into()));
        }
        Ok(self.calendars())
    }

    async fn create_calendar(
        &self,
        name: &str,
        _description: &str,
        _timezone: &str,
    ) -> DomainResult<RemoteCalendar> {
        let mut calendars = self.calendars.lock().unwrap();
        let calendar =
            RemoteCalendar { id: format!("cal-{}", calendars.len() + 1), name: name.into() };
        calendars.push(calendar.clone());
        Ok(calendar)
    }

    async fn search_events(
        &self,
        calendar_id: &str,
        query: &EventQuery,
    ) -> DomainResult<Vec<RemoteEvent>> {
        if self.fail_search {
            return Err(IntraSyncError::Network("connection reset".into()));
        }
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|(calendar, _)| calendar == calendar_id)
            .map(|(_, event)| event)
            .filter(|event| {
                event.start.is_some_and(|start| start < query.time_max)
                    && event.end.is_some_and(|end| end > query.time_min)
            })
            .filter(|event| event.summary.as_deref().is_some_and(|s| s.contains(&query.text)))
            .cloned()
            .collect())
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        draft: &RemoteEventDraft,
    ) -> DomainResult<String> {
        if self.fail_insert_for.as_deref() == Some(draft.summary.as_str()) {
            return Err(IntraSyncError::InvalidInput("Invalid colorId".into()));
        }
        let mut events = self.events.lock().unwrap();
        let id = format!("evt-{}", events.len() + 1);
        events.push((
            calendar_id.into(),
            RemoteEvent {
                id: id.clone(),
                summary: Some(draft.summary.clone()),
                location: Some(draft.location.clone()),
                start: Some(draft.start),
                end: Some(draft.end),
            },
        ));
        self.drafts.lock().unwrap().push(draft.clone());
        Ok(id)
    }
}
