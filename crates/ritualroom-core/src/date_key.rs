//! Calendar-date keys for day records.
//!
//! Keys are plain proleptic Gregorian dates rendered as `YYYY-MM-DD`. They are
//! derived from a calendar date, never from a timestamp, so a key does not
//! drift with the local UTC offset.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A `YYYY-MM-DD` key identifying one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from calendar components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDateKey(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// The local calendar date of the running process.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The day before, or `None` at the start of the supported calendar.
    pub fn previous(&self) -> Option<Self> {
        self.0.checked_sub_days(Days::new(1)).map(Self)
    }

    /// The day after, or `None` at the end of the supported calendar.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add_days(Days::new(1)).map(Self)
    }
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    Ok((next_first - first).num_days() as u32)
}

/// Every key of a calendar month, in ascending order.
pub fn month_keys(year: i32, month: u32) -> Result<Vec<DateKey>, ValidationError> {
    let days = days_in_month(year, month)?;
    (1..=days).map(|day| DateKey::from_ymd(year, month, day)).collect()
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    /// Accepts only the canonical zero-padded form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, KEY_FORMAT)
            .map_err(|_| ValidationError::InvalidDateKey(s.to_string()))?;
        let key = Self(date);
        if key.to_string() != s {
            return Err(ValidationError::InvalidDateKey(s.to_string()));
        }
        Ok(key)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
