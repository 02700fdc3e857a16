//! # IntraSync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTML parsing behind the core DOM traits (`scraper`)
//! - HTTP client with retries (`reqwest`)
//! - Google Calendar provider
//! - Configuration loading and iCalendar file output
//!
//! ## Architecture
//! - Implements traits defined in `intrasync-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod dom;
pub mod errors;
pub mod export;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use dom::{HtmlNode, HtmlPage};
pub use errors::InfraError;
pub use export::write_ics;
pub use http::HttpClient;
pub use integrations::GoogleCalendarClient;
