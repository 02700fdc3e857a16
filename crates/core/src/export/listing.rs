//! Human-readable event listing

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use intrasync_domain::{CanonicalEvent, Language};

const NO_ACTIVITY: &str = "No activity specified";

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const FRENCH_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Five-line block per event, separated by blank lines.
///
/// Dates follow the event's page language; times are shown in `timezone`.
pub fn render_listing(events: &[CanonicalEvent], timezone: Tz) -> String {
    let mut out = String::new();
    for (index, event) in events.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", event.summary());
        let _ = writeln!(out, "  {}", event.activity_label().unwrap_or(NO_ACTIVITY));
        let _ = writeln!(out, "  {}", event.location());
        let _ = writeln!(out, "  {}", long_date(event.start_time, event.language, timezone));
        let _ = writeln!(
            out,
            "  {} - {}",
            clock(event.start_time, timezone),
            clock(event.end_time, timezone)
        );
    }
    out
}

/// `21 April 2024` or `21 avril 2024`.
pub fn long_date(instant: DateTime<Utc>, language: Language, timezone: Tz) -> String {
    let local = instant.with_timezone(&timezone);
    let months = match language {
        Language::En => &ENGLISH_MONTHS,
        Language::Fr => &FRENCH_MONTHS,
    };
    format!("{} {} {}", local.day(), months[local.month0() as usize], local.year())
}

fn clock(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant.with_timezone(&timezone).format("%H:%M").to_string()
}
