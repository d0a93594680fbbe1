use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::BirthdateError;

/// Days of the week in bucket order, Monday first
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Birthdate text: date part with an optional time part that gets dropped
static BIRTHDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,4})-(\d{1,2})-(\d{1,2})(?:[T ]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?)?$")
        .expect("Invalid BIRTHDATE_RE regex")
});

/// Full English weekday name, independent of the host locale
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Calendar date of birth as given by the caller.
///
/// Unlike [`NaiveDate`] this keeps Feb 29 of a non-leap birth year
/// representable: such a record is malformed, and the window calculator
/// decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthdate {
    year: i32,
    month: u32,
    day: u32,
}

impl Birthdate {
    /// Accepts any month and day that exist in a leap year
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > max_day_in_month(month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }
}

/// Longest the month ever gets, i.e. in a leap year
fn max_day_in_month(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

impl From<NaiveDate> for Birthdate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Birthdate {
    type Err = BirthdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let caps = BIRTHDATE_RE
            .captures(s)
            .ok_or_else(|| BirthdateError::Format(s.to_string()))?;
        let year: i32 = caps[1].parse().map_err(|_| BirthdateError::Format(s.to_string()))?;
        let month: u32 = caps[2].parse().map_err(|_| BirthdateError::Format(s.to_string()))?;
        let day: u32 = caps[3].parse().map_err(|_| BirthdateError::Format(s.to_string()))?;
        Birthdate::new(year, month, day).ok_or_else(|| BirthdateError::OutOfRange(s.to_string()))
    }
}

impl Serialize for Birthdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthdate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birthday: Birthdate,
}

impl Person {
    pub fn new(name: impl Into<String>, birthday: Birthdate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }
}

/// Names to congratulate on one day of the upcoming week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayBucket {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub names: Vec<String>,
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*weekday))
}
