//! Application constants
//!
//! Centralized location for the fixed strings shared by extraction, export and
//! sync.

// Extraction
pub const UNKNOWN_ROOM: &str = "Unknown Room";
pub const FRENCH_PAGE_MARKER: &str = "Gérer les calendriers";

// iCalendar export
pub const ICS_PRODUCT_ID: &str = "-//IntranetCalendarSync//EN";
pub const ICS_UID_PREFIX: &str = "intranet";
pub const GENERATOR_FOOTER: &str = "Generated by Intranet Calendar Sync";
pub const DEFAULT_EXPORT_FILENAME: &str = "intranet_events.ics";

// Remote sync
pub const DEFAULT_CALENDAR_NAME: &str = "Intranet Events";
pub const CALENDAR_DESCRIPTION: &str =
    "Calendar for intranet events imported via Intranet Calendar Sync";
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_COLOR_ID: u8 = 1;
pub const COLOR_PALETTE_SIZE: u32 = 11;
pub const DEFAULT_TIMEZONE: &str = "UTC";
