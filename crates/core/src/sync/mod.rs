//! Remote calendar sync with duplicate suppression

pub mod ports;
pub mod service;

pub use ports::{CalendarProvider, EventQuery, RemoteCalendar, RemoteEvent, RemoteEventDraft};
pub use service::{color_id, CalendarSyncService, SyncEntry, SyncOutcome, SyncReport};
