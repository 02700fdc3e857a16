//! # IntraSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Schedule extraction over an abstract DOM
//! - iCalendar and listing renderers
//! - The remote calendar sync service and its port
//!
//! ## Architecture Principles
//! - Only depends on `intrasync-domain`
//! - No HTML parser, HTTP, or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod dom;
pub mod export;
pub mod extraction;
pub mod sync;

pub use dom::{DomDocument, DomNode};
pub use export::{render_ics, render_listing};
pub use extraction::{
    extract_events, ElementOutcome, ExtractOptions, ExtractionError, ExtractionReport, SkipReason,
};
pub use sync::{CalendarProvider, CalendarSyncService, SyncOutcome, SyncReport};
// Re-export pattern helpers
pub use extraction::patterns;
