//! Time-of-day handling for flight offers.
//!
//! The search provider reports departure and arrival times as bare strings
//! with no date attached, usually 24-hour "HH:MM" but sometimes 12-hour
//! "h:mm AM". This module provides a time-of-day type with tolerant parsing
//! and elapsed-minutes arithmetic that assumes at most one midnight crossing.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with no date component.
///
/// Flight offer times carry no date, so comparisons are purely clock-time
/// comparisons. Where a duration spans midnight, [`elapsed_minutes`] applies
/// a single-day wrap heuristic.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::ClockTime;
///
/// let t = ClockTime::parse("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // 12-hour input is accepted too
/// let t = ClockTime::parse("2:30 PM").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // Garbage is a None sentinel, never a panic
/// assert!(ClockTime::parse("sometime soon").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

/// Parse strategies tried in order; the first success wins.
const PARSE_STRATEGIES: [fn(&str) -> Result<ClockTime, TimeError>; 2] =
    [ClockTime::parse_hhmm24, ClockTime::parse_hhmm12];

impl ClockTime {
    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Tolerantly parse a time-of-day string.
    ///
    /// Tries strict 24-hour "HH:MM" first, then 12-hour "h:mm AM"/"hh:mm PM".
    /// Returns `None` when neither format matches; callers treat `None` as
    /// "unknown time, skip any check that needs it".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        PARSE_STRATEGIES.iter().find_map(|parse| parse(s).ok())
    }

    /// Parse a strict 24-hour "HH:MM" string.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_filter::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm24("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm24("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm24("1430").is_err());
    /// assert!(ClockTime::parse_hhmm24("25:00").is_err());
    /// assert!(ClockTime::parse_hhmm24("2:30 PM").is_err());
    /// ```
    pub fn parse_hhmm24(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Parse a 12-hour "h:mm AM" or "hh:mm PM" string.
    ///
    /// The meridiem is case-insensitive and the hour may have one or two
    /// digits, matching the provider's 12-hour output.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_filter::domain::ClockTime;
    ///
    /// let t = ClockTime::parse_hhmm12("12:00 AM").unwrap();
    /// assert_eq!(t.to_string(), "00:00");
    ///
    /// let t = ClockTime::parse_hhmm12("6:05 pm").unwrap();
    /// assert_eq!(t.to_string(), "18:05");
    ///
    /// assert!(ClockTime::parse_hhmm12("14:30").is_err());
    /// assert!(ClockTime::parse_hhmm12("0:30 AM").is_err());
    /// ```
    pub fn parse_hhmm12(s: &str) -> Result<Self, TimeError> {
        let (clock, meridiem) = s
            .rsplit_once(' ')
            .ok_or_else(|| TimeError::new("expected meridiem suffix"))?;

        let pm = match meridiem {
            m if m.eq_ignore_ascii_case("am") => false,
            m if m.eq_ignore_ascii_case("pm") => true,
            _ => return Err(TimeError::new("meridiem must be AM or PM")),
        };

        let (hour_str, minute_str) = clock
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected colon between hour and minute"))?;

        if hour_str.is_empty() || hour_str.len() > 2 {
            return Err(TimeError::new("hour must be 1-2 digits"));
        }

        let hour: u32 = hour_str
            .parse()
            .map_err(|_| TimeError::new("invalid hour digits"))?;
        if !(1..=12).contains(&hour) {
            return Err(TimeError::new("hour must be 1-12"));
        }

        if minute_str.len() != 2 {
            return Err(TimeError::new("minute must be 2 digits"));
        }
        let minute = parse_two_digits(minute_str.as_bytes())
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        // 12 AM is midnight, 12 PM is noon
        let hour24 = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        let time = NaiveTime::from_hms_opt(hour24, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        self.hour() as i64 * 60 + self.minute() as i64
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Minutes elapsed between two time-of-day strings.
///
/// When the arrival is earlier in clock time than the departure the flight is
/// assumed to have crossed midnight once, so 24 hours are added. This is a
/// heuristic, not a calendar-aware computation; it is only correct for
/// segments that wrap at most one day.
///
/// Returns `None` when either string fails to parse.
///
/// # Examples
///
/// ```
/// use flight_filter::domain::elapsed_minutes;
///
/// assert_eq!(elapsed_minutes("10:00 AM", "1:45 PM"), Some(225));
///
/// // Overnight wrap
/// assert_eq!(elapsed_minutes("11:30 PM", "1:00 AM"), Some(90));
///
/// assert_eq!(elapsed_minutes("whenever", "1:00 AM"), None);
/// ```
pub fn elapsed_minutes(departure: &str, arrival: &str) -> Option<i64> {
    let dep = ClockTime::parse(departure)?;
    let arr = ClockTime::parse(arrival)?;

    let mut diff = arr.minutes_from_midnight() - dep.minutes_from_midnight();
    if diff < 0 {
        diff += 24 * 60;
    }
    Some(diff)
}
