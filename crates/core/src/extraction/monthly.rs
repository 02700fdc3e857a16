//! Monthly (grid) view field extraction
//!
//! Events sit in table cells as `.appoint.singleday` blocks. The `<p>` label
//! carries `group - course`, the `title` attribute carries the course, the
//! activity and usually the time range, and the `<h4>` header holds the start
//! time when the title has no range.

use chrono::NaiveDate;
use intrasync_domain::ViewType;

use super::assembler::CandidateFields;
use super::dates::{date_from_text, resolve_column_date, DateColumnIndex};
use super::fields::{
    header_start, line_range, resolve_room, title_range, until_end, ClockRange, RoomSources,
};
use super::layout::CALENDAR_CONTAINER;
use super::normalize::CleanedText;
use super::patterns::{
    GROUP_CODE, LEADING_GROUP, LEADING_GROUP_PREFIX, LEADING_LABEL, LEADING_PUNCTUATION,
    TITLE_TIME_CLAUSE, TRAILING_PUNCTUATION,
};
use super::FieldExtractor;
use crate::dom::DomNode;

const CANDIDATES: &str = ".appoint.singleday";
const GRID_BODY: &str = ".appcont";
const EVENT_KINDS: [&str; 4] = ["rdv", "class", "tp", "exam"];
const LABEL: &str = "p";
const TIME_HEADER: &str = "h4";

pub struct MonthlyExtractor {
    calendar_text: String,
    date_index: DateColumnIndex,
    reference_date: NaiveDate,
}

impl MonthlyExtractor {
    pub fn new<N: DomNode>(root: &N, reference_date: NaiveDate) -> Self {
        Self {
            calendar_text: root.query(CALENDAR_CONTAINER).map(|c| c.text()).unwrap_or_default(),
            date_index: DateColumnIndex::build(root),
            reference_date,
        }
    }

    fn date_for<N: DomNode>(&self, element: &N) -> NaiveDate {
        resolve_column_date(element, &self.date_index).unwrap_or_else(|| {
            date_from_text(Some(&self.calendar_text), ViewType::Monthly, self.reference_date)
        })
    }
}

impl<N: DomNode> FieldExtractor<N> for MonthlyExtractor {
    fn candidates(&self, root: &N) -> Vec<N> {
        root.query_all(CANDIDATES)
            .into_iter()
            .filter(|element| element.closest(GRID_BODY).is_some())
            .filter(|element| EVENT_KINDS.iter().any(|kind| element.has_class(kind)))
            .collect()
    }

    fn extract(&self, element: &N) -> CandidateFields {
        let raw_text = element.text();
        let text = CleanedText::new(&raw_text);
        let title = element.attribute("title").unwrap_or_default();
        let label = element.query(LABEL).map(|p| p.text().trim().to_string()).unwrap_or_default();

        let (mut group, course) = split_label(&label);
        let (course, activity) = refine_with_title(course, &title);
        if group.is_empty() {
            group = GROUP_CODE
                .find(text.as_str())
                .or_else(|| GROUP_CODE.find(&title))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
        }

        let room = resolve_room(&RoomSources { title: Some(&title), text: &text });

        let header = element.query(TIME_HEADER).map(|h| h.text());
        let mut times = title_times(&title, header.as_deref());
        if !times.is_complete() {
            if let Some(range) = line_range(&text) {
                times = range;
            }
        }

        CandidateFields {
            group,
            course: trim_trailing(&course),
            activity: trim_trailing(&activity),
            room,
            times,
            date: self.date_for(element),
            raw_text: raw_text.trim().to_string(),
        }
    }
}

/// `G3 - Algorithms`, `G3Algorithms`, or a bare course name.
fn split_label(label: &str) -> (String, String) {
    if label.contains(" - ") {
        let mut parts = label.split(" - ").map(str::trim);
        let group = parts.next().unwrap_or_default().to_string();
        let course = parts.next().unwrap_or_default().to_string();
        return (group, course);
    }

    match LEADING_GROUP.captures(label) {
        Some(c) => (c[1].to_string(), LEADING_GROUP_PREFIX.replace(label, "").trim().to_string()),
        None => (String::new(), label.to_string()),
    }
}

/// Uses the title's main clause to lengthen the course and derive the activity.
fn refine_with_title(course: String, title: &str) -> (String, String) {
    let main = TITLE_TIME_CLAUSE.split(title).next().unwrap_or_default();
    let mut activity = LEADING_LABEL.replace(main, "").trim().to_string();
    let main = main.trim();

    let mut course = course;
    if main.contains(course.as_str()) && main.chars().count() > course.chars().count() {
        if let Some(longer) =
            main.split(['-', '»']).map(str::trim).find(|p| p.contains(course.as_str()))
        {
            course = longer.to_string();
        }
    }

    if activity.starts_with(course.as_str()) {
        activity = LEADING_PUNCTUATION.replace(&activity[course.len()..], "").into_owned();
    }

    (course, activity)
}

/// Title range first, then header start plus an optional `until` end.
fn title_times(title: &str, header: Option<&str>) -> ClockRange {
    if let Some(range) = title_range(title) {
        return range;
    }
    match header.and_then(header_start) {
        Some(start) => ClockRange { start: Some(start), end: until_end(title) },
        None => ClockRange::default(),
    }
}

fn trim_trailing(value: &str) -> String {
    TRAILING_PUNCTUATION.replace(value, "").into_owned()
}
