//! Meeting model.
//!
//! A meeting is one weekly occurrence of a class: a day plus a half-open
//! interval `[start, end)` and an optional room.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DayCode, TimeOfDay};

/// One `(day, start, end, room)` interval parsed from schedule text.
///
/// Well-formed meetings satisfy `start < end`. The parser never emits
/// any other kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meeting {
    /// Day of the week.
    pub day: DayCode,
    /// Start time (inclusive).
    pub start: TimeOfDay,
    /// End time (exclusive).
    pub end: TimeOfDay,
    /// Free-text room, if the schedule names one.
    pub room: Option<String>,
}

impl Meeting {
    /// Creates a meeting without a room.
    pub fn new(day: DayCode, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day,
            start,
            end,
            room: None,
        }
    }

    /// Sets the room. Blank text clears it.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        let room = room.into();
        let trimmed = room.trim();
        self.room = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Length in minutes (0 for ill-formed meetings).
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether `time` falls in `[start, end)`.
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        time >= self.start && time < self.end
    }

    /// Same day and half-open overlap. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.day,
            self.start.to_twelve_hour(),
            self.end.to_twelve_hour()
        )?;
        if let Some(room) = &self.room {
            write!(f, " {room}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_meeting_basics() {
        let m = Meeting::new(DayCode::Mon, at(9, 0), at(10, 30)).with_room("  Room 301 ");
        assert_eq!(m.room.as_deref(), Some("Room 301"));
        assert_eq!(m.duration_minutes(), 90);
        assert!(m.is_well_formed());
        assert!(m.contains(at(9, 0)));
        assert!(m.contains(at(10, 29)));
        assert!(!m.contains(at(10, 30)));
    }

    #[test]
    fn test_blank_room_is_none() {
        let m = Meeting::new(DayCode::Fri, at(8, 0), at(9, 0)).with_room("   ");
        assert_eq!(m.room, None);
    }

    #[test]
    fn test_overlap_rules() {
        let a = Meeting::new(DayCode::Mon, at(9, 0), at(10, 0));
        let b = Meeting::new(DayCode::Mon, at(9, 30), at(10, 30));
        let touching = Meeting::new(DayCode::Mon, at(10, 0), at(11, 0));
        let other_day = Meeting::new(DayCode::Tue, at(9, 0), at(10, 0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(!a.overlaps(&other_day));
    }

    #[test]
    fn test_ill_formed() {
        let m = Meeting::new(DayCode::Wed, at(11, 0), at(10, 0));
        assert!(!m.is_well_formed());
        assert_eq!(m.duration_minutes(), 0);
    }

    #[test]
    fn test_display() {
        let m = Meeting::new(DayCode::Thu, at(13, 0), at(14, 30)).with_room("Lab 2");
        assert_eq!(m.to_string(), "TH 1:00 PM - 2:30 PM Lab 2");
    }
}
