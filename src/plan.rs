//! Class plans: the set of subjects a student has picked.
//!
//! Adding a subject is guarded by two rules, checked in order:
//! 1. **Duplicate subject**: another entry already has the same subject
//!    code (trimmed, case-insensitive).
//! 2. **Schedule conflict**: another entry's schedule overlaps the
//!    candidate's (see [`conflict`](crate::conflict)).
//!
//! Checking is pure; [`Plan::add`] only inserts after both rules pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::conflict::ConflictDetector;
use crate::models::SubjectRef;
use crate::parser::SegmentGrammar;
use crate::timetable::{Timetable, TimetableBuilder};

/// Why a subject cannot join a plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanRejection {
    /// A different entry already covers this subject code.
    #[error("Cannot add duplicate subject: A subject with code {code} is already in the schedule")]
    DuplicateSubject {
        /// Normalized subject code.
        code: String,
        /// Identity of the entry already in the plan.
        existing: String,
    },

    /// The candidate's meetings overlap an entry's meetings.
    #[error("Schedule conflict: {code} conflicts with {other_code} ({other_section})")]
    ScheduleConflict {
        /// Candidate's normalized subject code.
        code: String,
        /// Identity of the conflicting entry.
        other: String,
        /// Conflicting entry's subject code.
        other_code: String,
        /// Conflicting entry's section.
        other_section: String,
    },
}

impl PlanRejection {
    /// Identity of the entry that caused the rejection.
    pub fn counterpart(&self) -> &str {
        match self {
            PlanRejection::DuplicateSubject { existing, .. } => existing,
            PlanRejection::ScheduleConflict { other, .. } => other,
        }
    }
}

/// A named, ordered set of subjects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Display name.
    pub name: String,
    entries: Vec<SubjectRef>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Rebuilds a saved plan from subject ids.
    ///
    /// Ids are resolved against `catalog` by identity, in id order. Ids
    /// with no catalog entry are skipped. No add rules are applied.
    pub fn from_ids<S: AsRef<str>>(name: impl Into<String>, ids: &[S], catalog: &[SubjectRef]) -> Self {
        let entries = ids
            .iter()
            .filter_map(|id| {
                let found = catalog.iter().find(|s| s.identity() == id.as_ref());
                if found.is_none() {
                    debug!(id = id.as_ref(), "saved plan references unknown subject");
                }
                found.cloned()
            })
            .collect();
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SubjectRef] {
        &self.entries
    }

    /// Entry identities in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(SubjectRef::identity).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with this identity is present.
    pub fn contains(&self, identity: &str) -> bool {
        self.entries.iter().any(|s| s.identity() == identity)
    }

    /// Decides whether `candidate` may join, using the built-in grammar.
    pub fn check_candidate(&self, candidate: &SubjectRef) -> Result<(), PlanRejection> {
        self.check_candidate_with(&ConflictDetector::new(), candidate)
    }

    /// Decides whether `candidate` may join.
    ///
    /// Entries with the candidate's own identity are ignored by both rules.
    pub fn check_candidate_with<G: SegmentGrammar>(
        &self,
        detector: &ConflictDetector<G>,
        candidate: &SubjectRef,
    ) -> Result<(), PlanRejection> {
        let identity = candidate.identity();
        let code = candidate.normalized_code();

        if let Some(existing) = self
            .entries
            .iter()
            .find(|s| s.identity() != identity && s.normalized_code() == code)
        {
            return Err(PlanRejection::DuplicateSubject {
                code,
                existing: existing.identity(),
            });
        }

        if let Some(other) = detector.find_conflict(candidate, &self.entries) {
            return Err(PlanRejection::ScheduleConflict {
                code,
                other: other.identity(),
                other_code: other.subject_code.clone(),
                other_section: other.section.clone(),
            });
        }

        Ok(())
    }

    /// Adds `candidate` if both rules pass.
    ///
    /// Returns `Ok(false)` if it is already present.
    pub fn add(&mut self, candidate: SubjectRef) -> Result<bool, PlanRejection> {
        self.add_with(&ConflictDetector::new(), candidate)
    }

    /// [`add`](Self::add) with a configured detector.
    pub fn add_with<G: SegmentGrammar>(
        &mut self,
        detector: &ConflictDetector<G>,
        candidate: SubjectRef,
    ) -> Result<bool, PlanRejection> {
        if self.contains(&candidate.identity()) {
            return Ok(false);
        }
        if let Err(rejection) = self.check_candidate_with(detector, &candidate) {
            debug!(
                plan = %self.name,
                candidate = %candidate.identity(),
                counterpart = rejection.counterpart(),
                "rejected plan addition: {rejection}"
            );
            return Err(rejection);
        }
        self.entries.push(candidate);
        Ok(true)
    }

    /// Removes the entry with this identity.
    pub fn remove(&mut self, identity: &str) -> Option<SubjectRef> {
        let pos = self.entries.iter().position(|s| s.identity() == identity)?;
        Some(self.entries.remove(pos))
    }

    /// Lays the plan out on a weekly grid.
    pub fn timetable<G: SegmentGrammar>(&self, builder: &TimetableBuilder<G>) -> Timetable {
        builder.build(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayCode;

    fn cs101() -> SubjectRef {
        SubjectRef::new("CS101")
            .with_id("1")
            .with_section("A")
            .with_schedule("M W 9:00 AM - 10:30 AM")
    }

    #[test]
    fn test_add_and_remove() {
        let mut plan = Plan::new("Fall");
        assert_eq!(plan.add(cs101()), Ok(true));
        assert_eq!(plan.add(cs101()), Ok(false));
        assert_eq!(plan.len(), 1);
        assert!(plan.contains("1"));

        let removed = plan.remove("1").unwrap();
        assert_eq!(removed.subject_code, "CS101");
        assert!(plan.is_empty());
        assert_eq!(plan.remove("1"), None);
    }

    #[test]
    fn test_duplicate_code_rejected_first() {
        let mut plan = Plan::new("Fall");
        plan.add(cs101()).unwrap();

        // Same code, other section, and also overlapping: duplicate wins.
        let other_section = SubjectRef::new(" cs101 ")
            .with_id("2")
            .with_section("B")
            .with_schedule("M 9:00 AM - 10:00 AM");
        let err = plan.add(other_section).unwrap_err();
        assert_eq!(
            err,
            PlanRejection::DuplicateSubject {
                code: "CS101".into(),
                existing: "1".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Cannot add duplicate subject: A subject with code CS101 is already in the schedule"
        );
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_conflict_rejected() {
        let mut plan = Plan::new("Fall");
        plan.add(cs101()).unwrap();

        let clash = SubjectRef::new("MATH1")
            .with_id("3")
            .with_section("C")
            .with_schedule("W 10:00 AM - 11:00 AM");
        let err = plan.check_candidate(&clash).unwrap_err();
        assert_eq!(err.counterpart(), "1");
        assert_eq!(err.to_string(), "Schedule conflict: MATH1 conflicts with CS101 (A)");
        assert!(plan.add(clash).is_err());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_back_to_back_accepted() {
        let mut plan = Plan::new("Fall");
        plan.add(cs101()).unwrap();
        let next = SubjectRef::new("ENG1")
            .with_id("4")
            .with_schedule("M W 10:30 AM - 12:00 PM");
        assert_eq!(plan.add(next), Ok(true));
        assert_eq!(plan.ids(), vec!["1", "4"]);
    }

    #[test]
    fn test_unscheduled_never_conflicts() {
        let mut plan = Plan::new("Fall");
        plan.add(cs101()).unwrap();
        let tba = SubjectRef::new("PE1").with_id("5").with_schedule("TBA");
        assert_eq!(plan.add(tba), Ok(true));
    }

    #[test]
    fn test_check_does_not_mutate() {
        let plan = Plan::new("Fall");
        assert!(plan.check_candidate(&cs101()).is_ok());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_from_ids_skips_unknown() {
        let catalog = vec![
            cs101(),
            SubjectRef::new("ENG1").with_id("4").with_schedule("T 1:00 PM - 2:00 PM"),
        ];
        let plan = Plan::from_ids("Saved", &["4", "missing", "1"], &catalog);
        assert_eq!(plan.ids(), vec!["4", "1"]);
        assert_eq!(plan.name, "Saved");
    }

    #[test]
    fn test_plan_timetable() {
        let mut plan = Plan::new("Fall");
        plan.add(cs101()).unwrap();
        let tt = plan.timetable(&TimetableBuilder::default());
        let days: Vec<_> = tt.origins().iter().map(|c| c.meeting.day).collect();
        assert_eq!(days, vec![DayCode::Mon, DayCode::Wed]);
    }

    #[test]
    fn test_plan_serializes() {
        let mut plan = Plan::new("Fall");
        plan.add(cs101()).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
