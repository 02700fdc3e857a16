//! Event date resolution
//!
//! Dates come from two places: grid header links in the monthly view
//! (`?start=2024-04-21`), and free text such as `Mon 21/4` or a bare day
//! number. Free-text dates carry no year; the reference date supplies it, so an
//! event shown across a year boundary is dated in the reference year.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use intrasync_domain::ViewType;
use tracing::debug;

use super::patterns::{DAY_HEADER, START_DATE_PARAM};
use crate::dom::DomNode;

const GRID: &str = ".appoints";
const GRID_HEADER_CELLS: &str = "thead th";
const HEADER_LINK: &str = ".title a";
const ALL_HEADER_LINKS: &str = ".appoints thead .title a";

/// Header label → date map for the monthly grid, built once per call.
///
/// A label carried by headers with different dates (the same day number in
/// two months) is ambiguous and resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateColumnIndex {
    dates: HashMap<String, Option<NaiveDate>>,
}

impl DateColumnIndex {
    pub fn build<N: DomNode>(root: &N) -> Self {
        let mut dates: HashMap<String, Option<NaiveDate>> = HashMap::new();
        for link in root.query_all(ALL_HEADER_LINKS) {
            let Some(date) = link.attribute("href").as_deref().and_then(date_from_href) else {
                continue;
            };
            dates
                .entry(link.text().trim().to_string())
                .and_modify(|known| {
                    if *known != Some(date) {
                        *known = None;
                    }
                })
                .or_insert(Some(date));
        }
        debug!(columns = dates.len(), "built date column index");
        Self { dates }
    }

    pub fn get(&self, label: &str) -> Option<NaiveDate> {
        self.dates.get(label.trim()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Date of the grid column holding `element`.
///
/// The cell's position in its row selects the header cell at the same position
/// in the grid's header row. Its label is looked up in `index`; a label the
/// index cannot resolve falls back to that header's own link.
pub fn resolve_column_date<N: DomNode>(element: &N, index: &DateColumnIndex) -> Option<NaiveDate> {
    let position = element.closest("td")?.element_index()?;
    let header = element.closest(GRID)?.query_all(GRID_HEADER_CELLS).into_iter().nth(position)?;
    let link = header.query(HEADER_LINK)?;

    index
        .get(&link.text())
        .or_else(|| link.attribute("href").as_deref().and_then(date_from_href))
}

/// ISO date from a `start=YYYY-MM-DD` query parameter.
pub fn date_from_href(href: &str) -> Option<NaiveDate> {
    let captures = START_DATE_PARAM.captures(href)?;
    NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d").ok()
}

/// Parses a date out of free text, degrading to `reference` on any failure.
///
/// - daily view: `<weekday> <day>/<month>`, year taken from `reference`
/// - monthly view: a leading day-of-month number within `reference`'s month
pub fn date_from_text(text: Option<&str>, view_type: ViewType, reference: NaiveDate) -> NaiveDate {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return reference;
    };

    let parsed = match view_type {
        ViewType::Daily => day_month_from_header(text, reference.year()),
        ViewType::Monthly => leading_day(text).and_then(|day| reference.with_day(day)),
        ViewType::Unknown => None,
    };

    parsed.unwrap_or_else(|| {
        debug!(%view_type, text = text.trim(), "date text not recognized, using reference date");
        reference
    })
}

fn day_month_from_header(text: &str, year: i32) -> Option<NaiveDate> {
    let captures = DAY_HEADER.captures(text)?;
    let day = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn leading_day(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    trimmed[..digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
    }

    #[test]
    fn daily_header_sets_day_and_month() {
        let date = date_from_text(Some("Lun 21/4"), ViewType::Daily, reference());
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 21).unwrap());

        let date = date_from_text(Some("  Fri 3/5 "), ViewType::Daily, reference());
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn daily_header_keeps_reference_year_across_new_year() {
        let december = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let date = date_from_text(Some("Thu 2/1"), ViewType::Daily, december);
        // Known limitation: a January header seen in December stays in 2024.
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn monthly_text_uses_leading_day_number() {
        let date = date_from_text(Some(" 17 avril"), ViewType::Monthly, reference());
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 17).unwrap());
    }

    #[test]
    fn invalid_or_missing_text_degrades_to_reference() {
        assert_eq!(date_from_text(None, ViewType::Daily, reference()), reference());
        assert_eq!(date_from_text(Some("   "), ViewType::Monthly, reference()), reference());
        assert_eq!(date_from_text(Some("Mon 31/2"), ViewType::Daily, reference()), reference());
        assert_eq!(date_from_text(Some("Avril"), ViewType::Monthly, reference()), reference());
        assert_eq!(date_from_text(Some("31"), ViewType::Monthly, reference()), reference());
        assert_eq!(date_from_text(Some("Mon 21/4"), ViewType::Unknown, reference()), reference());
    }

    #[test]
    fn href_date_requires_start_parameter() {
        assert_eq!(
            date_from_href("/planning/?view=month&start=2024-04-21"),
            NaiveDate::from_ymd_opt(2024, 4, 21)
        );
        assert_eq!(date_from_href("/planning/?date=2024-04-21"), None);
        assert_eq!(date_from_href("?start=2024-02-30"), None);
    }
}
