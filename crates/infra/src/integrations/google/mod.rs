//! Google Calendar v3 integration

pub mod client;
mod types;

pub use client::GoogleCalendarClient;
