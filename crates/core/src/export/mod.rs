//! Rendering of extracted events for files and terminals

pub mod ics;
pub mod listing;

pub use ics::{event_uid, ics_timestamp, render_ics};
pub use listing::{long_date, render_listing};
