//! iCalendar rendering of canonical events

use chrono::{DateTime, SecondsFormat, Utc};
use intrasync_domain::constants::{GENERATOR_FOOTER, ICS_PRODUCT_ID, ICS_UID_PREFIX};
use intrasync_domain::CanonicalEvent;

const LINE_BREAK: &str = "\r\n";
const MISSING_ACTIVITY: &str = "N/A";

/// Renders `events` as one VCALENDAR document with CRLF line endings.
///
/// `generated_at` becomes every event's DTSTAMP.
pub fn render_ics(events: &[CanonicalEvent], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{ICS_PRODUCT_ID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    let stamp = ics_timestamp(generated_at);
    for event in events {
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", event_uid(event)),
            format!("DTSTAMP:{stamp}"),
            format!("DTSTART:{}", ics_timestamp(event.start_time)),
            format!("DTEND:{}", ics_timestamp(event.end_time)),
            format!("SUMMARY:{}", event.summary()),
            format!("LOCATION:{}", event.location()),
            format!("DESCRIPTION:{}", description(event).replace('\n', "\\n")),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join(LINE_BREAK)
}

/// Stable identifier derived from group, course and start instant.
pub fn event_uid(event: &CanonicalEvent) -> String {
    let start = event.start_time.to_rfc3339_opts(SecondsFormat::Millis, true);
    format!("{ICS_UID_PREFIX}-{}-{}-{start}", event.group, event.course)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

/// `YYYYMMDDTHHMMSSZ`
pub fn ics_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

fn description(event: &CanonicalEvent) -> String {
    format!(
        "Activity: {}\nGroup: {}\nRoom: {}\n{GENERATOR_FOOTER}",
        event.activity_label().unwrap_or(MISSING_ACTIVITY),
        event.group,
        event.room,
    )
}
