//! Daily (planning) view field extraction
//!
//! Each `.event_registered` block opens with `group-course » activity` and
//! lists the time range and room on later lines. The day comes from the
//! header of the enclosing planning column.

use chrono::NaiveDate;
use intrasync_domain::ViewType;

use super::assembler::CandidateFields;
use super::dates::date_from_text;
use super::fields::{line_range, resolve_room, RoomSources};
use super::layout::CALENDAR_CONTAINER;
use super::normalize::CleanedText;
use super::FieldExtractor;
use crate::dom::DomNode;

const CANDIDATES: &str = ".event_registered";
const DAY_COLUMN: &str = ".planning-week-day";
const DAY_HEADER: &str = ".day-header";

pub struct DailyExtractor {
    calendar_text: String,
    reference_date: NaiveDate,
}

impl DailyExtractor {
    pub fn new<N: DomNode>(root: &N, reference_date: NaiveDate) -> Self {
        Self {
            calendar_text: root.query(CALENDAR_CONTAINER).map(|c| c.text()).unwrap_or_default(),
            reference_date,
        }
    }

    fn date_for<N: DomNode>(&self, element: &N) -> NaiveDate {
        let header = element
            .closest(DAY_COLUMN)
            .and_then(|column| column.query(DAY_HEADER))
            .map(|header| header.text())
            .filter(|text| !text.trim().is_empty());
        let text = header.as_deref().unwrap_or(&self.calendar_text);
        date_from_text(Some(text), ViewType::Daily, self.reference_date)
    }
}

impl<N: DomNode> FieldExtractor<N> for DailyExtractor {
    fn candidates(&self, root: &N) -> Vec<N> {
        root.query_all(CANDIDATES)
    }

    fn extract(&self, element: &N) -> CandidateFields {
        let raw_text = element.text();
        let text = CleanedText::new(&raw_text);
        let (group, course, activity) = split_course_info(text.first_line().unwrap_or_default());

        CandidateFields {
            group,
            course,
            activity,
            room: resolve_room(&RoomSources { title: None, text: &text }),
            times: line_range(&text).unwrap_or_default(),
            date: self.date_for(element),
            raw_text: raw_text.trim().to_string(),
        }
    }
}

/// Splits `G3-Algorithms » Lecture` at the chevron, then at the first hyphen.
///
/// Later hyphens stay in the course name: `G3-Advanced C++-Lab` keeps
/// `Advanced C++-Lab`. Without a hyphen there is no group and the whole
/// section is the course.
fn split_course_info(line: &str) -> (String, String, String) {
    let mut sections = line.split('»').map(str::trim);
    let group_and_course = sections.next().unwrap_or_default();
    let activity = sections.next().unwrap_or_default().to_string();

    let (group, course) = match group_and_course.split_once('-') {
        Some((group, course)) => (group.trim(), course.trim()),
        None => ("", group_and_course),
    };

    (group.to_string(), course.to_string(), activity)
}
