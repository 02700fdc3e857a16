//! Matcher chains shared by both view strategies
//!
//! Room and time resolution try a fixed list of independent matchers and keep
//! the first hit. Each matcher is a plain function so it can be tested alone.

use super::normalize::CleanedText;
use super::patterns::{
    first_match, padded_clock, ENGLISH_RANGE, FRENCH_RANGE, GENERIC_RANGE, LOOSE_CLOCK,
    ROOM_BARE, ROOM_LABELED, UNTIL_CLAUSE,
};

/// Where a room number may be found for one element.
#[derive(Debug, Clone, Copy)]
pub struct RoomSources<'a> {
    pub title: Option<&'a str>,
    pub text: &'a CleanedText,
}

type RoomMatcher = fn(&RoomSources<'_>) -> Option<String>;

const ROOM_CHAIN: [RoomMatcher; 5] =
    [labeled_in_title, bare_in_title, labeled_in_text, bare_in_text, first_line_with_number];

/// Resolves the room, or `None` when every matcher misses.
pub fn resolve_room(sources: &RoomSources<'_>) -> Option<String> {
    first_match(&ROOM_CHAIN, sources)
}

fn labeled_in_title(sources: &RoomSources<'_>) -> Option<String> {
    sources.title.and_then(labeled_room)
}

fn bare_in_title(sources: &RoomSources<'_>) -> Option<String> {
    sources.title.and_then(bare_room)
}

fn labeled_in_text(sources: &RoomSources<'_>) -> Option<String> {
    labeled_room(sources.text.as_str())
}

fn bare_in_text(sources: &RoomSources<'_>) -> Option<String> {
    bare_room(sources.text.as_str())
}

fn first_line_with_number(sources: &RoomSources<'_>) -> Option<String> {
    sources.text.lines().find_map(bare_room)
}

/// First 3-digit number, label optional: `salle 204`, `Room 204`, `204`.
pub fn labeled_room(haystack: &str) -> Option<String> {
    ROOM_LABELED.captures(haystack).map(|c| c[1].to_string())
}

pub fn bare_room(haystack: &str) -> Option<String> {
    ROOM_BARE.captures(haystack).map(|c| c[1].to_string())
}

/// Start and end clock strings, zero-padded `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl ClockRange {
    pub fn full(start: String, end: String) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

type TitleRangeMatcher = fn(&str) -> Option<ClockRange>;

const TITLE_RANGE_CHAIN: [TitleRangeMatcher; 2] = [french_range, english_range];

/// `de 9h00 à 12h00` then `from 9:00 to 12:00`.
pub fn title_range(title: &str) -> Option<ClockRange> {
    first_match(&TITLE_RANGE_CHAIN, title)
}

fn french_range(title: &str) -> Option<ClockRange> {
    let c = FRENCH_RANGE.captures(title)?;
    Some(ClockRange::full(padded_clock(&c[1], &c[2]), padded_clock(&c[3], &c[4])))
}

fn english_range(title: &str) -> Option<ClockRange> {
    let c = ENGLISH_RANGE.captures(title)?;
    Some(ClockRange::full(padded_clock(&c[1], &c[2]), padded_clock(&c[3], &c[4])))
}

/// End time from a `jusqu'à 12h00` / `until 12:00` clause.
pub fn until_end(title: &str) -> Option<String> {
    let c = UNTIL_CLAUSE.captures(title)?;
    Some(padded_clock(&c[1], &c[2]))
}

/// Start time from a grid cell header such as `9:00`, padded to `HH:MM`.
pub fn header_start(header: &str) -> Option<String> {
    let header = header.trim();
    if header.is_empty() {
        return None;
    }
    Some(match LOOSE_CLOCK.captures(header) {
        Some(c) => padded_clock(&c[1], &c[2]),
        None => format!("{header:0>5}"),
    })
}

/// First `HH:MM – HH:MM` range found on a cleaned line.
pub fn line_range(text: &CleanedText) -> Option<ClockRange> {
    text.lines().find_map(|line| {
        let c = GENERIC_RANGE.captures(line)?;
        Some(ClockRange::full(c[1].to_string(), c[2].to_string()))
    })
}
