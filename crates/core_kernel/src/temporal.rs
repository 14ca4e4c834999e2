//! Stay dates and resort-local time
//!
//! A stay runs from a check-in date to a check-out date; the number of
//! nights is the whole-day difference between them. "Today" is always judged
//! in the resort's own time zone so that a guest booking late in the evening
//! from abroad is not told their check-in is in the past.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for the resort properties
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timezone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA zone name such as `Asia/Kolkata`
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(name.to_string()))
    }

    /// Returns the calendar date in this timezone at the given instant
    pub fn today_at(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.0).date_naive()
    }

    /// Returns the current calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        self.today_at(Utc::now())
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Kolkata)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid stay: check-out {check_out} must be after check-in {check_in}")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// A stay between a check-in and a strictly later check-out date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    /// Creates a stay, rejecting check-out on or before check-in
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, TemporalError> {
        if check_out <= check_in {
            return Err(TemporalError::InvalidStay {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Creates a stay of `nights` nights starting at `check_in`
    pub fn from_nights(check_in: NaiveDate, nights: u32) -> Result<Self, TemporalError> {
        Self::new(check_in, check_in + Duration::days(i64::from(nights)))
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights; at least one by construction
    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out) as u32
    }

    /// Returns true if a guest is in residence on the night of `date`
    pub fn covers_night(&self, date: NaiveDate) -> bool {
        date >= self.check_in && date < self.check_out
    }
}

/// Whole nights between two dates, negative when `check_out` precedes `check_in`
///
/// Dates carry no time of day, so the ceiling of the day difference is the
/// day difference itself.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stay_nights() {
        let stay = StayPeriod::new(date(2024, 12, 20), date(2024, 12, 23)).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_same_day_stay_rejected() {
        let result = StayPeriod::new(date(2024, 12, 20), date(2024, 12, 20));
        assert!(matches!(result, Err(TemporalError::InvalidStay { .. })));
    }

    #[test]
    fn test_from_nights() {
        let stay = StayPeriod::from_nights(date(2024, 2, 28), 2).unwrap();
        assert_eq!(stay.check_out(), date(2024, 3, 1));
    }

    #[test]
    fn test_today_in_kolkata_runs_ahead_of_utc() {
        let tz = Timezone::default();
        let late_utc = DateTime::parse_from_rfc3339("2024-06-15T20:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(tz.today_at(late_utc), date(2024, 6, 16));
    }

    #[test]
    fn test_parse_unknown_timezone() {
        assert!(matches!(
            Timezone::parse("Mars/Olympus"),
            Err(TemporalError::InvalidTimezone(_))
        ));
    }
}
