use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::CalendarError;

/// Fixed reference dates handy for trying out the window rules
pub const SAMPLE_DATES: [(i32, u32, u32); 5] = [
    (2024, 1, 1), // Monday, leap year
    (2024, 1, 2), // Tuesday, leap year
    (1999, 3, 1), // Monday, non-leap year
    (1976, 3, 1), // Monday, leap year
    (1998, 3, 2), // Monday, non-leap year
];

/// Resolve the reference date the window is anchored to.
///
/// An explicit `YYYY-MM-DD` date wins, then a sample date by index. Otherwise
/// the current date is taken in `tz`, or in the host's local timezone.
pub fn resolve_today(
    date: Option<&str>,
    sample: Option<usize>,
    tz: Option<&str>,
) -> Result<NaiveDate, CalendarError> {
    if let Some(date_str) = date {
        return NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|source| {
            CalendarError::InvalidDate {
                value: date_str.to_string(),
                source,
            }
        });
    }

    if let Some(index) = sample {
        return sample_date(index);
    }

    match tz {
        Some(name) => {
            let tz: Tz = name
                .parse()
                .map_err(|_| CalendarError::UnknownTimezone(name.to_string()))?;
            Ok(tz.from_utc_datetime(&chrono::Utc::now().naive_utc()).date_naive())
        }
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn sample_date(index: usize) -> Result<NaiveDate, CalendarError> {
    let unknown = || CalendarError::UnknownSample {
        index,
        count: SAMPLE_DATES.len(),
    };
    let &(year, month, day) = SAMPLE_DATES.get(index).ok_or_else(unknown)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(unknown)
}
