//! Event text normalization
//!
//! The intranet decorates every event with enrolment counters, slot links and
//! option menus. Those blocks are cut out before the text is split into lines.

use super::patterns::{BOILERPLATE_LEAD, STRAY_OPTION_LINE, TIME_TOKEN};

/// Cleaned text of one candidate element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    text: String,
}

impl CleanedText {
    /// Normalizes raw element text.
    pub fn new(raw: &str) -> Self {
        Self { text: strip_boilerplate(raw.trim()) }
    }

    /// Text with boilerplate removed, before line splitting.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Trimmed, non-empty lines without leftover option lines.
    ///
    /// The iterator is lazy and can be cloned to restart the scan.
    pub fn lines(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !STRAY_OPTION_LINE.is_match(line))
    }

    pub fn first_line(&self) -> Option<&str> {
        self.lines().next()
    }
}

/// Cuts every boilerplate block from its lead phrase up to the next `HH:MM`.
///
/// A lead phrase with no time token after it is kept.
pub fn strip_boilerplate(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(lead) = BOILERPLATE_LEAD.find_at(text, cursor) {
        let Some(time) = TIME_TOKEN.find_at(text, lead.end()) else {
            break;
        };
        cleaned.push_str(&text[cursor..lead.start()]);
        cursor = time.start();
    }

    cleaned.push_str(&text[cursor..]);
    cleaned
}
