//! Parse errors for schedule text.
//!
//! The best-effort entry points ([`ScheduleParser::parse`],
//! [`schedules_conflict`]) never return these; they log and drop the
//! offending piece instead. Strict entry points (`FromStr`,
//! [`ScheduleParser::parse_segment`]) surface them to the caller.
//!
//! [`ScheduleParser::parse`]: crate::parser::ScheduleParser::parse
//! [`ScheduleParser::parse_segment`]: crate::parser::ScheduleParser::parse_segment
//! [`schedules_conflict`]: crate::conflict::schedules_conflict

use thiserror::Error;

/// Result alias for strict parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while interpreting schedule text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not a `H:MM AM/PM` or `HH:MM` clock string.
    #[error("invalid time: '{0}'")]
    InvalidTime(String),

    /// Day token matches no entry of the canonical day table.
    #[error("unknown day: '{0}'")]
    UnknownDay(String),

    /// Segment does not match the `DAYS START - END [ROOM]` grammar.
    #[error("malformed schedule segment: '{0}'")]
    MalformedSegment(String),

    /// End time is not after start time.
    #[error("empty interval: {start} - {end}")]
    EmptyInterval {
        /// Parsed start (24-hour).
        start: String,
        /// Parsed end (24-hour).
        end: String,
    },

    /// Segment grammar matched but no day token survived normalization.
    #[error("no recognized day in segment: '{0}'")]
    NoDays(String),
}
