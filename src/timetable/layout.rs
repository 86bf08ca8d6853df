//! Grid layout configuration.

use serde::{Deserialize, Serialize};

use super::TimeSlot;
use crate::models::{Meeting, TimeOfDay};

/// Default first row (07:00).
pub const DEFAULT_FIRST_SLOT: TimeOfDay = match TimeOfDay::from_minutes(7 * 60) {
    Some(t) => t,
    None => TimeOfDay::MIDNIGHT,
};

/// Default last row (21:30).
pub const DEFAULT_LAST_SLOT: TimeOfDay = match TimeOfDay::from_minutes(21 * 60 + 30) {
    Some(t) => t,
    None => TimeOfDay::LAST,
};

/// Default row height in minutes.
pub const DEFAULT_SLOT_MINUTES: u16 = 30;

/// Rows of the weekly grid.
///
/// Rows start at `first_slot` and advance by `slot_minutes` up to and
/// including `last_slot`. The default layout is 07:00 through 21:30 in
/// 30-minute steps (30 rows).
///
/// # Examples
///
/// ```
/// use u_timetable::models::TimeOfDay;
/// use u_timetable::timetable::GridLayout;
///
/// assert_eq!(GridLayout::default().slot_count(), 30);
///
/// let mornings = GridLayout::new()
///     .with_first_slot(TimeOfDay::from_hm(8, 0).unwrap())
///     .with_last_slot(TimeOfDay::from_hm(11, 0).unwrap())
///     .with_slot_minutes(60);
/// assert_eq!(mornings.slot_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Start of the first row.
    pub first_slot: TimeOfDay,
    /// Start of the last row (inclusive).
    pub last_slot: TimeOfDay,
    /// Row height in minutes (at least 1).
    pub slot_minutes: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            first_slot: DEFAULT_FIRST_SLOT,
            last_slot: DEFAULT_LAST_SLOT,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl GridLayout {
    /// Creates the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first row start.
    pub fn with_first_slot(mut self, first_slot: TimeOfDay) -> Self {
        self.first_slot = first_slot;
        self
    }

    /// Sets the last row start.
    pub fn with_last_slot(mut self, last_slot: TimeOfDay) -> Self {
        self.last_slot = last_slot;
        self
    }

    /// Sets the row height. Zero is raised to one minute.
    pub fn with_slot_minutes(mut self, slot_minutes: u16) -> Self {
        self.slot_minutes = slot_minutes.max(1);
        self
    }

    /// Row height, never zero.
    #[inline]
    pub fn step(&self) -> u16 {
        self.slot_minutes.max(1)
    }

    /// Generates the row sequence.
    pub fn slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        let mut next = Some(self.first_slot);
        while let Some(start) = next.filter(|t| *t <= self.last_slot) {
            slots.push(TimeSlot::new(slots.len(), start));
            next = start.checked_add_minutes(self.step());
        }
        slots
    }

    /// Number of rows.
    pub fn slot_count(&self) -> usize {
        if self.last_slot < self.first_slot {
            return 0;
        }
        let span = self.last_slot.minutes() - self.first_slot.minutes();
        usize::from(span / self.step()) + 1
    }

    /// Rows a meeting spans: `max(1, ceil(duration / slot_minutes))`.
    pub fn row_span(&self, meeting: &Meeting) -> usize {
        let duration = meeting.duration_minutes();
        usize::from(duration.div_ceil(self.step())).max(1)
    }
}
