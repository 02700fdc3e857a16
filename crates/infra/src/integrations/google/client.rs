//! Google Calendar provider implementation

use std::time::Duration;

use async_trait::async_trait;
use intrasync_core::sync::{
    CalendarProvider, EventQuery, RemoteCalendar, RemoteEvent, RemoteEventDraft,
};
use intrasync_domain::{IntraSyncError, Result, SyncConfig};
use reqwest::Method;
use tracing::debug;

use super::types::{
    CalendarListResponse, CreatedResource, EventDateTime, EventsResponse, NewCalendar, NewEvent,
};
use crate::http::HttpClient;

/// Google Calendar v3 client authorized with a bearer access token.
pub struct GoogleCalendarClient {
    http: HttpClient,
    base_url: String,
}

impl GoogleCalendarClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Builds a client from the sync configuration.
    ///
    /// # Errors
    /// Returns `IntraSyncError::Auth` when no access token is configured.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        let token = config.access_token.as_deref().filter(|t| !t.trim().is_empty()).ok_or_else(
            || IntraSyncError::Auth("no Google access token configured".into()),
        )?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .max_attempts(config.http_max_attempts)
            .bearer_token(token)
            .build()?;

        Ok(Self::new(http, config.api_base_url.as_str()))
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!("{}/calendars/{}/events", self.base_url, urlencoding::encode(calendar_id))
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarClient {
    async fn list_calendars(&self) -> Result<Vec<RemoteCalendar>> {
        let url = format!("{}/users/me/calendarList", self.base_url);
        let response: CalendarListResponse =
            self.http.send_json(self.http.request(Method::GET, &url)).await?;

        let items = response
            .items
            .ok_or_else(|| IntraSyncError::Parse("Invalid calendar list response".into()))?;
        debug!(calendars = items.len(), "listed calendars");

        Ok(items
            .into_iter()
            .map(|entry| RemoteCalendar { id: entry.id, name: entry.summary })
            .collect())
    }

    async fn create_calendar(
        &self,
        name: &str,
        description: &str,
        timezone: &str,
    ) -> Result<RemoteCalendar> {
        let url = format!("{}/calendars", self.base_url);
        let body = NewCalendar { summary: name, description, time_zone: timezone };
        let created: CreatedResource =
            self.http.send_json(self.http.request(Method::POST, &url).json(&body)).await?;

        let id = created
            .id
            .ok_or_else(|| {
                IntraSyncError::Parse("Failed to get calendar ID from response".into())
            })?;
        let name = if created.summary.is_empty() { name.to_string() } else { created.summary };
        Ok(RemoteCalendar { id, name })
    }

    async fn search_events(
        &self,
        calendar_id: &str,
        query: &EventQuery,
    ) -> Result<Vec<RemoteEvent>> {
        let params = [
            ("timeMin", query.time_min.to_rfc3339()),
            ("timeMax", query.time_max.to_rfc3339()),
            ("q", query.text.clone()),
        ];
        let response: EventsResponse = self
            .http
            .send_json(self.http.request(Method::GET, self.events_url(calendar_id)).query(&params))
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|event| RemoteEvent {
                id: event.id,
                summary: event.summary,
                location: event.location,
                start: event.start.and_then(|s| s.date_time),
                end: event.end.and_then(|e| e.date_time),
            })
            .collect())
    }

    async fn insert_event(&self, calendar_id: &str, draft: &RemoteEventDraft) -> Result<String> {
        let body = NewEvent {
            summary: &draft.summary,
            location: &draft.location,
            description: &draft.description,
            start: EventDateTime {
                date_time: Some(draft.start),
                time_zone: Some(draft.timezone.clone()),
            },
            end: EventDateTime {
                date_time: Some(draft.end),
                time_zone: Some(draft.timezone.clone()),
            },
            color_id: draft.color_id.to_string(),
        };

        let created: CreatedResource = self
            .http
            .send_json(self.http.request(Method::POST, self.events_url(calendar_id)).json(&body))
            .await?;

        created
            .id
            .ok_or_else(|| IntraSyncError::Parse("Failed to get event ID from response".into()))
    }
}
