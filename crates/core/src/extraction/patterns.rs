//! Compiled patterns for the bilingual intranet markup
//!
//! Every regular expression the extractors rely on lives here so the French and
//! English variants of a pattern sit next to each other.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// A clock token such as `09:30`.
pub static TIME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}:\d{2}").expect("TIME_TOKEN should compile"));

/// Lead phrases of the boilerplate blocks the intranet injects into events.
pub static BOILERPLATE_LEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Etudiants inscrits|Students registered|Students enrolled|",
        r"Voir les créneaux|See slots|View appointment slots|",
        r"Plus d'options|More options|Vous avez été présent|You were present",
    ))
    .expect("BOILERPLATE_LEAD should compile")
});

/// Leftover option lines once the boilerplate blocks are gone.
pub static STRAY_OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:More|Plus|View|Voir|You|Vous)").expect("STRAY_OPTION_LINE should compile")
});

pub static GROUP_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"G\d+").expect("GROUP_CODE should compile"));

pub static LEADING_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(G\d+)").expect("LEADING_GROUP should compile"));

pub static LEADING_GROUP_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^G\d+\s*-?\s*").expect("LEADING_GROUP_PREFIX should compile"));

/// Start of the `, de 9h00 …` / `, from 9:00 …` clause in a title.
pub static TITLE_TIME_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*(?:de|from)").expect("TITLE_TIME_CLAUSE should compile"));

pub static LEADING_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^-]+-\s*").expect("LEADING_LABEL should compile"));

pub static LEADING_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-»\s]+").expect("LEADING_PUNCTUATION should compile"));

pub static TRAILING_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-»\s]+$").expect("TRAILING_PUNCTUATION should compile"));

/// A 3-digit room number, optionally labeled: `salle 204`, `Room 204`, `204`.
pub static ROOM_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:salle|room)?\s*(\d{3})\b").expect("ROOM_LABELED should compile")
});

pub static ROOM_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{3})\b").expect("ROOM_BARE should compile"));

/// `de 9h00 à 12h00`, `de 09:00 - 12:00`
pub static FRENCH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"de (\d{1,2})[h:](\d{2})(?: ?[à-] ?)(\d{1,2})[h:](\d{2})")
        .expect("FRENCH_RANGE should compile")
});

/// `from 9:00 to 12:00`
pub static ENGLISH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"from (\d{1,2}):(\d{2}) to (\d{1,2}):(\d{2})")
        .expect("ENGLISH_RANGE should compile")
});

/// `jusqu'à 12h00`, `until 12:00`
pub static UNTIL_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:jusqu'à|until)\s+(\d{1,2})[h:](\d{2})").expect("UNTIL_CLAUSE should compile")
});

/// Loose clock in a header cell: `9:00`, `09h30`.
pub static LOOSE_CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[h:](\d{2})").expect("LOOSE_CLOCK should compile"));

/// `09:00 – 12:00` or `09:00-12:00` on a text line.
pub static GENERIC_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2})\s*[–-]\s*(\d{2}:\d{2})").expect("GENERIC_RANGE should compile")
});

/// ISO date carried in a grid header link.
pub static START_DATE_PARAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"start=(\d{4}-\d{2}-\d{2})").expect("START_DATE_PARAM should compile")
});

/// `Mon 21/4`, `lun. 21/4`, `Mercredi 3/10`
pub static DAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:mon|tue|wed|thu|fri|sat|sun|lun|mar|mer|jeu|ven|sam|dim)",
        r"[[:alpha:]]*\.?\s*(\d{1,2})/(\d{1,2})",
    ))
    .expect("DAY_HEADER should compile")
});

/// Formats captured hour and minute digits as a zero-padded `HH:MM` string.
pub fn padded_clock(hour: &str, minute: &str) -> String {
    format!("{hour:0>2}:{minute}")
}

/// Parses an `HH:MM` string into a time of day.
pub fn parse_hhmm(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token.trim(), "%H:%M").ok()
}

/// Runs an ordered matcher chain and returns the first success.
pub fn first_match<I, T, F>(chain: &[F], input: &I) -> Option<T>
where
    I: ?Sized,
    F: Fn(&I) -> Option<T>,
{
    chain.iter().find_map(|matcher| matcher(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_clock_pads_single_digit_hours() {
        assert_eq!(padded_clock("9", "05"), "09:05");
        assert_eq!(padded_clock("12", "30"), "12:30");
    }

    #[test]
    fn parse_hhmm_rejects_out_of_range_values() {
        assert_eq!(parse_hhmm("08:15"), NaiveTime::from_hms_opt(8, 15, 0));
        assert_eq!(parse_hhmm("25:00"), None);
        assert_eq!(parse_hhmm("09h00"), None);
    }

    #[test]
    fn first_match_stops_at_first_success() {
        fn none(_: &str) -> Option<u8> {
            None
        }
        fn one(_: &str) -> Option<u8> {
            Some(1)
        }
        fn two(_: &str) -> Option<u8> {
            Some(2)
        }
        let chain: [fn(&str) -> Option<u8>; 3] = [none, one, two];
        assert_eq!(first_match(&chain, "x"), Some(1));
    }

    #[test]
    fn day_header_accepts_both_languages() {
        assert!(DAY_HEADER.is_match("Mon 21/4"));
        assert!(DAY_HEADER.is_match("lun. 21/4"));
        assert!(DAY_HEADER.is_match("Mercredi 3/10"));
        assert!(!DAY_HEADER.is_match("21/4"));
    }
}
