//! Weekday codes.
//!
//! The canonical day table is the single source of weekday ordering for
//! every component: parsing, conflict checks, and grid columns.
//!
//! | Code | Day       | Index |
//! |------|-----------|-------|
//! | M    | Monday    | 0     |
//! | T    | Tuesday   | 1     |
//! | W    | Wednesday | 2     |
//! | TH   | Thursday  | 3     |
//! | F    | Friday    | 4     |
//! | S    | Saturday  | 5     |
//! | SU   | Sunday    | 6     |
//!
//! Single letters `T` and `S` are reserved for Tuesday and Saturday, so
//! Thursday and Sunday need the two-letter forms `TH` and `SU`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayCode {
    #[serde(rename = "M")]
    Mon,
    #[serde(rename = "T")]
    Tue,
    #[serde(rename = "W")]
    Wed,
    #[serde(rename = "TH")]
    Thu,
    #[serde(rename = "F")]
    Fri,
    #[serde(rename = "S")]
    Sat,
    #[serde(rename = "SU")]
    Sun,
}

impl DayCode {
    /// All days in weekday-index order.
    pub const ALL: [DayCode; 7] = [
        DayCode::Mon,
        DayCode::Tue,
        DayCode::Wed,
        DayCode::Thu,
        DayCode::Fri,
        DayCode::Sat,
        DayCode::Sun,
    ];

    /// Number of days in the week.
    pub const COUNT: usize = 7;

    /// Weekday index (Mon=0 .. Sun=6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical schedule code (`M`, `T`, `W`, `TH`, `F`, `S`, `SU`).
    pub fn code(self) -> &'static str {
        match self {
            DayCode::Mon => "M",
            DayCode::Tue => "T",
            DayCode::Wed => "W",
            DayCode::Thu => "TH",
            DayCode::Fri => "F",
            DayCode::Sat => "S",
            DayCode::Sun => "SU",
        }
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            DayCode::Mon => "Monday",
            DayCode::Tue => "Tuesday",
            DayCode::Wed => "Wednesday",
            DayCode::Thu => "Thursday",
            DayCode::Fri => "Friday",
            DayCode::Sat => "Saturday",
            DayCode::Sun => "Sunday",
        }
    }

    /// Three-letter abbreviation.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// Maps a day token to its code.
    ///
    /// Case-insensitive and whitespace-trimmed. Accepts the canonical code,
    /// common abbreviations, and full names. Returns `None` for anything
    /// else; callers skip that day.
    pub fn normalize(token: &str) -> Option<Self> {
        let day = match token.trim().to_ascii_uppercase().as_str() {
            "M" | "MON" | "MONDAY" => DayCode::Mon,
            "T" | "TUE" | "TUES" | "TUESDAY" => DayCode::Tue,
            "W" | "WED" | "WEDNESDAY" => DayCode::Wed,
            "TH" | "THU" | "THUR" | "THURS" | "THURSDAY" => DayCode::Thu,
            "F" | "FRI" | "FRIDAY" => DayCode::Fri,
            "S" | "SAT" | "SATURDAY" => DayCode::Sat,
            "SU" | "SUN" | "SUNDAY" => DayCode::Sun,
            _ => return None,
        };
        Some(day)
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| ParseError::UnknownDay(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_table() {
        let codes: Vec<_> = DayCode::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["M", "T", "W", "TH", "F", "S", "SU"]);
        for (i, day) in DayCode::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(DayCode::from_index(i), Some(*day));
            assert_eq!(DayCode::normalize(day.code()), Some(*day));
            assert_eq!(DayCode::normalize(day.name()), Some(*day));
            assert_eq!(DayCode::normalize(day.short_name()), Some(*day));
        }
        assert_eq!(DayCode::from_index(7), None);
    }

    #[test]
    fn test_single_letters_are_reserved() {
        assert_eq!(DayCode::normalize("T"), Some(DayCode::Tue));
        assert_eq!(DayCode::normalize("TH"), Some(DayCode::Thu));
        assert_eq!(DayCode::normalize("S"), Some(DayCode::Sat));
        assert_eq!(DayCode::normalize("SU"), Some(DayCode::Sun));
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(DayCode::normalize("  th "), Some(DayCode::Thu));
        assert_eq!(DayCode::normalize("tues"), Some(DayCode::Tue));
        assert_eq!(DayCode::normalize("Wednesday"), Some(DayCode::Wed));
        assert_eq!(DayCode::normalize("thurs"), Some(DayCode::Thu));
    }

    #[test]
    fn test_unknown_tokens() {
        for bad in ["", "XX", "MO", "TU", "R", "Funday", "M W"] {
            assert_eq!(DayCode::normalize(bad), None, "accepted {bad:?}");
        }
        assert_eq!("XX".parse::<DayCode>(), Err(ParseError::UnknownDay("XX".into())));
    }

    #[test]
    fn test_ordering_follows_index() {
        let mut days = vec![DayCode::Sun, DayCode::Mon, DayCode::Thu];
        days.sort();
        assert_eq!(days, vec![DayCode::Mon, DayCode::Thu, DayCode::Sun]);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&DayCode::Thu).unwrap(), "\"TH\"");
        let d: DayCode = serde_json::from_str("\"SU\"").unwrap();
        assert_eq!(d, DayCode::Sun);
    }
}
