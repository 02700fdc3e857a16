//! Event assembly and the validity gate

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use intrasync_domain::{CanonicalEvent, LayoutContext};

use super::fields::ClockRange;
use super::patterns::parse_hhmm;
use super::{ElementOutcome, ExtractionError, SkipReason};

/// Raw fields pulled from one candidate element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFields {
    pub group: String,
    pub course: String,
    pub activity: String,
    /// `None` stands for the unknown-room sentinel.
    pub room: Option<String>,
    pub times: ClockRange,
    pub date: NaiveDate,
    pub raw_text: String,
}

/// Turns candidate fields into an emitted event, a silent skip, or a failure.
pub fn assemble(fields: CandidateFields, layout: &LayoutContext, timezone: Tz) -> ElementOutcome {
    let instants = match resolve_instants(&fields.times, fields.date, timezone) {
        Ok(instants) => instants,
        Err(error) => return ElementOutcome::Failed(error),
    };

    if let Some(reason) = gate(&fields, instants.is_some()) {
        return ElementOutcome::Skipped(reason);
    }

    let (Some((start_time, end_time)), Some(room)) = (instants, fields.room) else {
        return ElementOutcome::Skipped(SkipReason::MissingTime);
    };

    ElementOutcome::Emitted(CanonicalEvent {
        group: fields.group,
        course: fields.course,
        activity: fields.activity,
        room,
        start_time,
        end_time,
        raw_text: fields.raw_text,
        language: layout.language,
    })
}

fn gate(fields: &CandidateFields, has_instants: bool) -> Option<SkipReason> {
    if fields.group.is_empty() {
        Some(SkipReason::MissingGroup)
    } else if fields.course.is_empty() {
        Some(SkipReason::MissingCourse)
    } else if !has_instants {
        Some(SkipReason::MissingTime)
    } else if fields.room.is_none() {
        Some(SkipReason::UnknownRoom)
    } else {
        None
    }
}

/// Both instants, or `None` when either clock string is missing.
fn resolve_instants(
    times: &ClockRange,
    date: NaiveDate,
    timezone: Tz,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>, ExtractionError> {
    let (Some(start), Some(end)) = (&times.start, &times.end) else {
        return Ok(None);
    };
    let start = at(date, parse_clock(start)?, timezone)?;
    let end = at(date, parse_clock(end)?, timezone)?;
    Ok(Some((start, end)))
}

fn parse_clock(value: &str) -> Result<NaiveTime, ExtractionError> {
    parse_hhmm(value).ok_or_else(|| ExtractionError::InvalidTime(value.to_string()))
}

fn at(date: NaiveDate, time: NaiveTime, timezone: Tz) -> Result<DateTime<Utc>, ExtractionError> {
    match timezone.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => {
            Ok(local.with_timezone(&Utc))
        }
        LocalResult::None => Err(ExtractionError::NonexistentLocalTime {
            date,
            time,
            timezone: timezone.name().to_string(),
        }),
    }
}
