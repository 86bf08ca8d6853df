//! Time-of-day model and clock-string conversion.
//!
//! A [`TimeOfDay`] is an integer count of minutes since midnight in
//! `0..=1439`. Schedule text carries times in 12-hour form
//! (`9:00 AM`, `12:30pm`); grid keys use zero-padded 24-hour form
//! (`09:00`).
//!
//! # Conversion Rules
//! - `12:xx AM` is `00:xx`, `12:xx PM` is `12:xx`
//! - any other `PM` hour adds 12 hours
//! - hours outside `1..=12` (12-hour) or `0..=23` (24-hour) are rejected
//!
//! Parsing returns `None` on malformed input; it never panics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Minutes since midnight, `0..=1439`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: Self = Self(0);
    /// Last representable minute (`23:59`).
    pub const LAST: Self = Self(MINUTES_PER_DAY - 1);

    /// Creates a time from minutes since midnight.
    ///
    /// Returns `None` if `minutes >= 1440`.
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Creates a time from a 24-hour `(hour, minute)` pair.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour in 24-hour form (0-23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Minute within the hour (0-59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Rounds down to a multiple of `step` minutes.
    ///
    /// A zero step leaves the time unchanged.
    pub fn floor_to(self, step: u16) -> Self {
        if step == 0 {
            return self;
        }
        Self(self.0 - self.0 % step)
    }

    /// Adds minutes, returning `None` past `23:59`.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }

    /// Parses `H:MM AM`, `HH:MM pm`, `9:00AM`, ...
    ///
    /// The meridiem is case-insensitive and may follow the minutes with or
    /// without whitespace.
    pub fn parse_twelve_hour(text: &str) -> Option<Self> {
        let upper = text.trim().to_ascii_uppercase();
        let (clock, pm) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest, false)
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest, true)
        } else {
            return None;
        };

        let (hour, minute) = split_clock(clock.trim_end())?;
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        Self::from_hm(hour, minute)
    }

    /// Parses `HH:MM` or `H:MM` in 24-hour form.
    pub fn parse_twenty_four_hour(text: &str) -> Option<Self> {
        let (hour, minute) = split_clock(text.trim())?;
        Self::from_hm(hour, minute)
    }

    /// Parses either clock form, trying 12-hour first.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_twelve_hour(text).or_else(|| Self::parse_twenty_four_hour(text))
    }

    /// Zero-padded 24-hour rendering (`09:05`).
    pub fn to_twenty_four_hour(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// 12-hour rendering without a leading zero (`9:05 AM`, `12:00 PM`).
    pub fn to_twelve_hour(self) -> String {
        let (hour, period) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{hour}:{:02} {period}", self.minute())
    }
}

/// Splits `H:MM` / `HH:MM` into numeric parts. Minutes must be two digits.
fn split_clock(text: &str) -> Option<(u16, u16)> {
    let (hour, minute) = text.split_once(':')?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if hour.len() > 2 || minute.len() != 2 || !digits(hour) || !digits(minute) {
        return None;
    }
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_twenty_four_hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twelve_hour_basics() {
        assert_eq!(TimeOfDay::parse_twelve_hour("9:00 AM").map(TimeOfDay::minutes), Some(540));
        assert_eq!(TimeOfDay::parse_twelve_hour("10:30 am").map(TimeOfDay::minutes), Some(630));
        assert_eq!(TimeOfDay::parse_twelve_hour("1:15PM").map(TimeOfDay::minutes), Some(795));
        assert_eq!(TimeOfDay::parse_twelve_hour(" 09:45 pm ").map(TimeOfDay::minutes), Some(1305));
    }

    #[test]
    fn test_twelve_hour_noon_and_midnight() {
        assert_eq!(TimeOfDay::parse_twelve_hour("12:00 AM"), Some(TimeOfDay::MIDNIGHT));
        assert_eq!(TimeOfDay::parse_twelve_hour("12:30 AM").map(TimeOfDay::minutes), Some(30));
        assert_eq!(TimeOfDay::parse_twelve_hour("12:00 PM").map(TimeOfDay::minutes), Some(720));
        assert_eq!(TimeOfDay::parse_twelve_hour("11:59 PM"), Some(TimeOfDay::LAST));
    }

    #[test]
    fn test_twelve_hour_rejects_malformed() {
        for bad in [
            "", "9:00", "9 AM", "9:0 AM", "9:000 AM", "13:00 PM", "0:30 AM", "9:60 AM",
            "x9:00 AM", "9:00 XM", "123:00 AM", "9:00 AM PM",
        ] {
            assert_eq!(TimeOfDay::parse_twelve_hour(bad), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn test_twenty_four_hour() {
        assert_eq!(TimeOfDay::parse_twenty_four_hour("09:00").map(TimeOfDay::minutes), Some(540));
        assert_eq!(TimeOfDay::parse_twenty_four_hour("9:00").map(TimeOfDay::minutes), Some(540));
        assert_eq!(TimeOfDay::parse_twenty_four_hour("23:59"), Some(TimeOfDay::LAST));
        assert_eq!(TimeOfDay::parse_twenty_four_hour("24:00"), None);
        assert_eq!(TimeOfDay::parse_twenty_four_hour("9:00 AM"), None);
    }

    #[test]
    fn test_formatting() {
        let t = TimeOfDay::from_hm(9, 5).unwrap();
        assert_eq!(t.to_twenty_four_hour(), "09:05");
        assert_eq!(t.to_twelve_hour(), "9:05 AM");
        assert_eq!(TimeOfDay::MIDNIGHT.to_twelve_hour(), "12:00 AM");
        assert_eq!(TimeOfDay::from_hm(12, 0).unwrap().to_twelve_hour(), "12:00 PM");
        assert_eq!(TimeOfDay::from_hm(21, 30).unwrap().to_twelve_hour(), "9:30 PM");
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn test_from_str_either_form() {
        assert_eq!("2:00 PM".parse::<TimeOfDay>().map(TimeOfDay::minutes), Ok(840));
        assert_eq!("14:00".parse::<TimeOfDay>().map(TimeOfDay::minutes), Ok(840));
        assert_eq!(
            "noon".parse::<TimeOfDay>(),
            Err(ParseError::InvalidTime("noon".into()))
        );
    }

    #[test]
    fn test_floor_and_add() {
        let t = TimeOfDay::from_hm(9, 45).unwrap();
        assert_eq!(t.floor_to(30), TimeOfDay::from_hm(9, 30).unwrap());
        assert_eq!(t.floor_to(0), t);
        assert_eq!(t.checked_add_minutes(15), TimeOfDay::from_hm(10, 0));
        assert_eq!(TimeOfDay::LAST.checked_add_minutes(1), None);
        assert_eq!(TimeOfDay::from_minutes(1440), None);
    }

    #[test]
    fn test_serde_as_string() {
        let t = TimeOfDay::from_hm(7, 30).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"07:30\"");
        let back: TimeOfDay = serde_json::from_str("\"7:30 AM\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"later\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_twelve_hour_round_trip(
            hour in 1u16..=12,
            minute in 0u16..60,
            pm in any::<bool>(),
            pad in any::<bool>(),
            space in any::<bool>(),
            lower in any::<bool>(),
        ) {
            let period = match (pm, lower) {
                (true, true) => "pm",
                (true, false) => "PM",
                (false, true) => "am",
                (false, false) => "AM",
            };
            let hour_text = if pad { format!("{hour:02}") } else { hour.to_string() };
            let sep = if space { " " } else { "" };
            let input = format!("{hour_text}:{minute:02}{sep}{period}");

            let parsed = TimeOfDay::parse_twelve_hour(&input);
            prop_assert!(parsed.is_some());
            let canonical = format!("{hour}:{minute:02} {}", if pm { "PM" } else { "AM" });
            prop_assert_eq!(parsed.map(TimeOfDay::to_twelve_hour), Some(canonical));
        }

        #[test]
        fn prop_twenty_four_hour_round_trip(minutes in 0u16..1440) {
            let t = TimeOfDay::from_minutes(minutes).unwrap();
            prop_assert_eq!(TimeOfDay::parse_twenty_four_hour(&t.to_twenty_four_hour()), Some(t));
            prop_assert_eq!(TimeOfDay::parse_twelve_hour(&t.to_twelve_hour()), Some(t));
        }
    }
}
