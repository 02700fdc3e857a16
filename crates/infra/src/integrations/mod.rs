//! Third-party service integrations

pub mod google;

pub use google::GoogleCalendarClient;
