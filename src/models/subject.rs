//! Subject (course section) reference.
//!
//! The surrounding application owns subjects; this crate only reads the
//! code, section, identity and raw schedule text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A course section offered in the catalog.
///
/// # Identity
/// Two references denote the same subject iff their [`identity`](Self::identity)
/// strings match. The identity is the catalog id when one is known,
/// otherwise `"{subject_code}-{section}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRef {
    /// Catalog identifier. `None` before the subject is persisted.
    pub id: Option<String>,
    /// Subject code (e.g., "CS101").
    pub subject_code: String,
    /// Section label (e.g., "G1"). Empty when unsectioned.
    pub section: String,
    /// Raw schedule text (`"M W F 9:00 AM - 10:30 AM Room 301"`).
    pub schedule: String,
    /// Domain-specific metadata the core passes through untouched.
    pub attributes: HashMap<String, String>,
}

impl SubjectRef {
    /// Creates an unsectioned subject with no schedule.
    pub fn new(subject_code: impl Into<String>) -> Self {
        Self {
            id: None,
            subject_code: subject_code.into(),
            section: String::new(),
            schedule: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the catalog id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the section.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Sets the raw schedule text.
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    /// Adds a pass-through attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Stable identity used for plan membership.
    pub fn identity(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}-{}", self.subject_code, self.section),
        }
    }

    /// Subject code trimmed and upper-cased, for duplicate detection.
    pub fn normalized_code(&self) -> String {
        self.subject_code.trim().to_uppercase()
    }

    /// Whether the schedule text is blank.
    pub fn is_unscheduled(&self) -> bool {
        self.schedule.trim().is_empty()
    }
}
