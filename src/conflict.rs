//! Time-conflict detection between schedules.
//!
//! Two schedules conflict iff some meeting of one and some meeting of the
//! other share a day and overlap as half-open intervals:
//! `a.start < b.end && b.start < a.end`. Back-to-back classes
//! (`a.end == b.start`) do not conflict.
//!
//! Unparseable or blank schedules have no meetings and therefore never
//! conflict with anything.

use crate::models::{Meeting, SubjectRef};
use crate::parser::{FallbackOnly, ScheduleParser, SegmentGrammar};

/// A pair of overlapping meetings, one from each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingConflict {
    /// Meeting from the first schedule.
    pub first: Meeting,
    /// Meeting from the second schedule.
    pub second: Meeting,
}

/// Compares schedule strings for overlapping meetings.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector<G = FallbackOnly> {
    parser: ScheduleParser<G>,
}

impl ConflictDetector<FallbackOnly> {
    /// Creates a detector using the built-in grammar only.
    pub fn new() -> Self {
        Self {
            parser: ScheduleParser::new(),
        }
    }
}

impl<G: SegmentGrammar> ConflictDetector<G> {
    /// Creates a detector sharing a configured parser.
    pub fn with_parser(parser: ScheduleParser<G>) -> Self {
        Self { parser }
    }

    /// The underlying parser.
    pub fn parser(&self) -> &ScheduleParser<G> {
        &self.parser
    }

    /// Whether any meeting of `a` overlaps any meeting of `b`.
    ///
    /// Symmetric; short-circuits on the first overlapping pair.
    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        if a.trim().is_empty() || b.trim().is_empty() {
            return false;
        }
        meetings_overlap(&self.parser.parse(a), &self.parser.parse(b))
    }

    /// All overlapping meeting pairs, in `a`-major order.
    pub fn meeting_conflicts(&self, a: &str, b: &str) -> Vec<MeetingConflict> {
        let left = self.parser.parse(a);
        let right = self.parser.parse(b);
        let mut pairs = Vec::new();
        for first in &left {
            for second in right.iter().filter(|m| first.overlaps(m)) {
                pairs.push(MeetingConflict {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
        pairs
    }

    /// First subject in `others` (other than `candidate` itself) whose
    /// schedule conflicts with the candidate's.
    pub fn find_conflict<'a, I>(&self, candidate: &SubjectRef, others: I) -> Option<&'a SubjectRef>
    where
        I: IntoIterator<Item = &'a SubjectRef>,
    {
        let identity = candidate.identity();
        let mine = self.parser.parse(&candidate.schedule);
        if mine.is_empty() {
            return None;
        }
        others
            .into_iter()
            .filter(|other| other.identity() != identity)
            .find(|other| meetings_overlap(&mine, &self.parser.parse(&other.schedule)))
    }
}

/// Whether any pair across the two meeting lists overlaps.
pub fn meetings_overlap(a: &[Meeting], b: &[Meeting]) -> bool {
    a.iter().any(|x| b.iter().any(|y| x.overlaps(y)))
}

/// [`ConflictDetector::conflicts`] with the built-in grammar.
pub fn schedules_conflict(a: &str, b: &str) -> bool {
    ConflictDetector::new().conflicts(a, b)
}
