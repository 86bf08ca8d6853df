//! Schedule-string parsing.
//!
//! Turns free-form schedule text into [`Meeting`]s.
//!
//! # Grammar
//!
//! ```text
//! schedule := segment ( " / " segment )*
//! segment  := <external single-segment grammar>
//!           | DAY+ TIME "-" TIME [ROOM]
//! DAY      := whitespace-separated day token (see DayCode::normalize)
//! TIME     := H:MM or HH:MM followed by AM/PM, case-insensitive
//! ```
//!
//! Each segment is tried against the injected [`SegmentGrammar`] first
//! and against the built-in multi-day grammar second. Parsing is
//! best-effort: a malformed segment is dropped, an unknown day token drops
//! only that day, and blank input yields no meetings.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{DayCode, TimeOfDay};
//! use u_timetable::parser::ScheduleParser;
//!
//! let parser = ScheduleParser::new();
//! let meetings = parser.parse("M W F 9:00 AM - 10:30 AM Room 301");
//!
//! assert_eq!(meetings.len(), 3);
//! assert_eq!(meetings[1].day, DayCode::Wed);
//! assert_eq!(meetings[1].start, TimeOfDay::from_hm(9, 0).unwrap());
//! assert_eq!(meetings[1].room.as_deref(), Some("Room 301"));
//! ```

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::error::{ParseError, ParseResult};
use crate::models::{DayCode, Meeting, TimeOfDay};

/// Literal separator between segments.
pub const SEGMENT_SEPARATOR: &str = " / ";

const FALLBACK_SEGMENT: &str =
    r"(?i)^([a-z\s]+?)\s+([0-9]{1,2}:[0-9]{2}\s*[ap]m)\s*-\s*([0-9]{1,2}:[0-9]{2}\s*[ap]m)\s*(.*)$";

fn fallback_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(FALLBACK_SEGMENT).ok())
        .as_ref()
}

/// A single-segment grammar supplied by the surrounding system.
///
/// Contract: segment text in, one meeting or `None` out. Returning `None`
/// hands the segment to the built-in multi-day grammar.
pub trait SegmentGrammar: Send + Sync {
    /// Grammar name, for logs.
    fn name(&self) -> &'static str {
        "external"
    }

    /// Parses one trimmed, non-empty segment.
    fn parse_segment(&self, segment: &str) -> Option<Meeting>;
}

impl<F> SegmentGrammar for F
where
    F: Fn(&str) -> Option<Meeting> + Send + Sync,
{
    fn parse_segment(&self, segment: &str) -> Option<Meeting> {
        self(segment)
    }
}

/// No external grammar: every segment goes to the built-in grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackOnly;

impl SegmentGrammar for FallbackOnly {
    fn name(&self) -> &'static str {
        "fallback-only"
    }

    fn parse_segment(&self, _segment: &str) -> Option<Meeting> {
        None
    }
}

/// Parses raw schedule strings into meetings.
///
/// Stateless apart from the grammar; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser<G = FallbackOnly> {
    grammar: G,
}

impl ScheduleParser<FallbackOnly> {
    /// Creates a parser with only the built-in grammar.
    pub fn new() -> Self {
        Self {
            grammar: FallbackOnly,
        }
    }

    /// Creates a parser that tries `grammar` before the built-in grammar.
    pub fn with_grammar<G: SegmentGrammar>(grammar: G) -> ScheduleParser<G> {
        ScheduleParser { grammar }
    }
}

impl<G: SegmentGrammar> ScheduleParser<G> {
    /// Parses a full schedule string.
    ///
    /// Output order: segment order, then day-token order within a segment.
    /// Never fails; unusable segments contribute nothing.
    pub fn parse(&self, raw: &str) -> Vec<Meeting> {
        let mut meetings = Vec::new();
        for segment in split_segments(raw) {
            match self.parse_segment(segment) {
                Ok(parsed) => meetings.extend(parsed),
                Err(e) => debug!(segment, error = %e, "dropping schedule segment"),
            }
        }
        meetings
    }

    /// Parses one segment, reporting why it was unusable.
    pub fn parse_segment(&self, segment: &str) -> ParseResult<Vec<Meeting>> {
        let segment = segment.trim();
        if let Some(meeting) = self.grammar.parse_segment(segment) {
            if meeting.is_well_formed() {
                return Ok(vec![meeting]);
            }
            trace!(
                grammar = self.grammar.name(),
                segment,
                "external grammar produced an empty interval, trying fallback"
            );
        }
        parse_fallback_segment(segment)
    }
}

/// Splits on `" / "`, trimming pieces and dropping blank ones.
pub fn split_segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parses `DAY+ START - END [ROOM]` into one meeting per recognized day.
///
/// Unknown day tokens are skipped. Fails if the grammar does not match,
/// either time is invalid, the interval is empty, or no day survives.
pub fn parse_fallback_segment(segment: &str) -> ParseResult<Vec<Meeting>> {
    let caps = fallback_pattern()
        .and_then(|re| re.captures(segment))
        .ok_or_else(|| ParseError::MalformedSegment(segment.to_string()))?;

    let (days, start_text, end_text, tail) = (&caps[1], &caps[2], &caps[3], &caps[4]);
    let start = TimeOfDay::parse_twelve_hour(start_text)
        .ok_or_else(|| ParseError::InvalidTime(start_text.to_string()))?;
    let end = TimeOfDay::parse_twelve_hour(end_text)
        .ok_or_else(|| ParseError::InvalidTime(end_text.to_string()))?;
    if start >= end {
        return Err(ParseError::EmptyInterval {
            start: start.to_twenty_four_hour(),
            end: end.to_twenty_four_hour(),
        });
    }

    let meetings: Vec<Meeting> = days
        .split_whitespace()
        .filter_map(|token| {
            let day = DayCode::normalize(token);
            if day.is_none() {
                trace!(token, segment, "skipping unrecognized day token");
            }
            day
        })
        .map(|day| Meeting::new(day, start, end).with_room(tail))
        .collect();

    if meetings.is_empty() {
        return Err(ParseError::NoDays(segment.to_string()));
    }
    Ok(meetings)
}

/// Parses with the built-in grammar only.
pub fn parse_schedule(raw: &str) -> Vec<Meeting> {
    ScheduleParser::new().parse(raw)
}
