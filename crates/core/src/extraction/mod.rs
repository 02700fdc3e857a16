//! Schedule extraction from an intranet calendar page
//!
//! One call detects the page layout, picks the matching view strategy, and
//! turns every candidate element into an [`ElementOutcome`]. A failure on one
//! element never aborts the others.

pub mod assembler;
pub mod daily;
pub mod dates;
pub mod fields;
pub mod layout;
pub mod monthly;
pub mod normalize;
pub mod patterns;

use chrono::{NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use intrasync_domain::{impl_label_conversions, CanonicalEvent, LayoutContext, ViewType};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub use assembler::{assemble, CandidateFields};
pub use daily::DailyExtractor;
pub use layout::{detect_language, detect_layout, detect_view_type};
pub use monthly::MonthlyExtractor;

use crate::dom::{DomDocument, DomNode};

/// Per-view strategy: which elements are events, and what each one says.
pub trait FieldExtractor<N: DomNode> {
    fn candidates(&self, root: &N) -> Vec<N>;
    fn extract(&self, element: &N) -> CandidateFields;
}

/// Inputs that would otherwise be read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Supplies the year, and the month in the monthly view.
    pub reference_date: NaiveDate,
    /// Zone the page's wall-clock times are expressed in.
    pub timezone: Tz,
}

impl ExtractOptions {
    pub const fn new(reference_date: NaiveDate, timezone: Tz) -> Self {
        Self { reference_date, timezone }
    }

    /// Today's date as seen in `timezone`.
    pub fn today_in(timezone: Tz) -> Self {
        Self::new(Utc::now().with_timezone(&timezone).date_naive(), timezone)
    }
}

/// Why a candidate element produced no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    MissingGroup,
    MissingCourse,
    MissingTime,
    UnknownRoom,
}

impl_label_conversions!(SkipReason {
    MissingGroup => "missing_group",
    MissingCourse => "missing_course",
    MissingTime => "missing_time",
    UnknownRoom => "unknown_room",
});

/// A per-element failure that is logged and contained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("invalid clock value `{0}`")]
    InvalidTime(String),

    #[error("{date} {time} does not exist in {timezone}")]
    NonexistentLocalTime { date: NaiveDate, time: NaiveTime, timezone: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementOutcome {
    Emitted(CanonicalEvent),
    Skipped(SkipReason),
    Failed(ExtractionError),
}

/// Everything one extraction call produced, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub layout: LayoutContext,
    pub outcomes: Vec<ElementOutcome>,
}

impl ExtractionReport {
    pub fn events(&self) -> impl Iterator<Item = &CanonicalEvent> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ElementOutcome::Emitted(event) => Some(event),
            _ => None,
        })
    }

    pub fn into_events(self) -> Vec<CanonicalEvent> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                ElementOutcome::Emitted(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub fn emitted(&self) -> usize {
        self.events().count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, ElementOutcome::Skipped(_))).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, ElementOutcome::Failed(_))).count()
    }
}

/// Extracts every event visible on `document`.
///
/// Pure with respect to the document and `options`: the same page and options
/// always yield the same report.
#[instrument(
    skip_all,
    fields(reference_date = %options.reference_date, timezone = %options.timezone)
)]
pub fn extract_events<D: DomDocument>(document: &D, options: &ExtractOptions) -> ExtractionReport {
    let layout = detect_layout(document);
    info!(language = %layout.language, view_type = %layout.view_type, "detected page layout");

    let root = document.root();
    let outcomes = match layout.view_type {
        ViewType::Monthly => {
            run(&MonthlyExtractor::new(&root, options.reference_date), &root, &layout, options)
        }
        ViewType::Daily => {
            run(&DailyExtractor::new(&root, options.reference_date), &root, &layout, options)
        }
        ViewType::Unknown => {
            info!("no supported calendar view on page");
            Vec::new()
        }
    };

    let report = ExtractionReport { layout, outcomes };
    info!(
        emitted = report.emitted(),
        skipped = report.skipped(),
        failed = report.failed(),
        "extraction finished"
    );
    report
}

fn run<N, E>(
    extractor: &E,
    root: &N,
    layout: &LayoutContext,
    options: &ExtractOptions,
) -> Vec<ElementOutcome>
where
    N: DomNode,
    E: FieldExtractor<N>,
{
    let candidates = extractor.candidates(root);
    debug!(candidates = candidates.len(), "found candidate elements");

    candidates
        .iter()
        .enumerate()
        .map(|(position, element)| {
            let fields = extractor.extract(element);
            debug!(
                position,
                group = %fields.group,
                course = %fields.course,
                room = fields.room.as_deref().unwrap_or(intrasync_domain::constants::UNKNOWN_ROOM),
                start = fields.times.start.as_deref().unwrap_or_default(),
                end = fields.times.end.as_deref().unwrap_or_default(),
                date = %fields.date,
                "extracted candidate fields"
            );

            let outcome = assemble(fields, layout, options.timezone);
            match &outcome {
                ElementOutcome::Emitted(_) => {}
                ElementOutcome::Skipped(reason) => debug!(position, %reason, "skipped element"),
                ElementOutcome::Failed(error) => {
                    warn!(position, %error, "failed to extract element");
                }
            }
            outcome
        })
        .collect()
}
