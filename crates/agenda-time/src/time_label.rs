//! Bookable times of day (`HH:MM`).

use std::str::FromStr;

use agenda_core::errors::{Error, Result};
use agenda_core::utilities::{data_formatters, data_parsers};
use agenda_core::{Minutes, MINUTES_PER_DAY};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A time of day with minute resolution, formatted as `HH:MM`.
///
/// Ordered by the minute-of-day value it encodes. Besides `00:00`–`23:59`
/// there is one extra value, [`END_OF_DAY`](Self::END_OF_DAY) (`24:00`),
/// which only serves as the exclusive end of an interval; it is never a
/// bookable slot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeLabel(Minutes);

impl TimeLabel {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: TimeLabel = TimeLabel(0);

    /// Last bookable label (`23:59`).
    pub const LAST: TimeLabel = TimeLabel(MINUTES_PER_DAY - 1);

    /// Exclusive end of the day (`24:00`).
    pub const END_OF_DAY: TimeLabel = TimeLabel(MINUTES_PER_DAY);

    /// Create a label from an hour (0–23) and minute (0–59), or `24:00`.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self> {
        if hour == 24 && minute == 0 {
            return Ok(Self::END_OF_DAY);
        }
        if hour > 23 {
            return Err(Error::Time(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Time(format!("minute {minute} out of range [0, 59]")));
        }
        Ok(TimeLabel(hour as Minutes * 60 + minute as Minutes))
    }

    /// Create a bookable label from minutes since midnight (0–1439).
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY as u32 {
            return Err(Error::Time(format!(
                "minute of day {minutes} out of range [0, {}]",
                MINUTES_PER_DAY - 1
            )));
        }
        Ok(TimeLabel(minutes as Minutes))
    }

    /// Parse `HH:MM` (or `HH:MM:SS`, seconds discarded). `24:00` parses as
    /// [`END_OF_DAY`](Self::END_OF_DAY).
    pub fn parse(s: &str) -> Result<Self> {
        let (h, m) = data_parsers::parse_time_of_day(s)
            .ok_or_else(|| Error::Time(format!("expected HH:MM, got {s:?}")))?;
        Self::from_hm(h, m)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> Minutes {
        self.0
    }

    /// Hour component (0–23, or 24 for `END_OF_DAY`).
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// The label `minutes` later, or `None` if that passes `23:59`.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = (self.0 as u32).saturating_add(minutes);
        Self::from_minutes(total).ok()
    }

    /// The label `minutes` later, capped at [`END_OF_DAY`](Self::END_OF_DAY).
    pub fn add_minutes_capped(self, minutes: u32) -> Self {
        let total = (self.0 as u32).saturating_add(minutes);
        TimeLabel(total.min(MINUTES_PER_DAY as u32) as Minutes)
    }

    /// Return `true` for `00:00`–`23:59`, `false` for `END_OF_DAY`.
    pub fn is_bookable(&self) -> bool {
        self.0 < MINUTES_PER_DAY
    }
}

impl std::fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&data_formatters::format_time_of_day(self.0))
    }
}

impl std::fmt::Debug for TimeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeLabel({self})")
    }
}

impl FromStr for TimeLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TimeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeLabel::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format() {
        let t = TimeLabel::parse("08:30").unwrap();
        assert_eq!(t.minutes(), 510);
        assert_eq!((t.hour(), t.minute()), (8, 30));
        assert_eq!(t.to_string(), "08:30");
        assert_eq!(TimeLabel::parse("8:05").unwrap().to_string(), "08:05");
        assert_eq!(TimeLabel::parse("13:00:00").unwrap().to_string(), "13:00");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(TimeLabel::parse("24:01").is_err());
        assert!(TimeLabel::parse("25:00").is_err());
        assert!(TimeLabel::parse("12:60").is_err());
        assert!(TimeLabel::parse("noon").is_err());
        assert!(TimeLabel::from_minutes(1440).is_err());
    }

    #[test]
    fn ordering_follows_minutes() {
        let a: TimeLabel = "09:00".parse().unwrap();
        let b: TimeLabel = "10:30".parse().unwrap();
        assert!(a < b);
        assert_eq!(a.checked_add_minutes(90), Some(b));
        assert_eq!(TimeLabel::LAST.checked_add_minutes(1), None);
    }

    #[test]
    fn end_of_day_closes_intervals() {
        let eod = TimeLabel::parse("24:00").unwrap();
        assert_eq!(eod, TimeLabel::END_OF_DAY);
        assert_eq!(TimeLabel::parse("24:00:00").unwrap(), eod);
        assert_eq!(eod.to_string(), "24:00");
        assert!(!eod.is_bookable());
        assert!(TimeLabel::LAST.is_bookable());
        assert!(TimeLabel::LAST < eod);
        assert_eq!(TimeLabel::LAST.add_minutes_capped(30), eod);
        assert_eq!(TimeLabel::MIDNIGHT.add_minutes_capped(90).to_string(), "01:30");
        assert!(TimeLabel::from_minutes(1440).is_err());
    }

    #[test]
    fn serde_uses_label() {
        let t = TimeLabel::from_hm(7, 5).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"07:05\"");
        let back: TimeLabel = serde_json::from_str("\"07:05:00\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeLabel>("\"7h05\"").is_err());
    }
}
