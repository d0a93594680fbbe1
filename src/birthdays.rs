use chrono::{Datelike, NaiveDate, Weekday};
use std::borrow::Borrow;
use tracing::{debug, trace};

use crate::types::{is_leap_year, weekday_name, Birthdate, Person, WeekdayBucket, WEEK};

/// Length of the upcoming window in days
pub const WINDOW_DAYS: i64 = 7;

/// On Mondays the window also covers the weekend that just passed
pub const MONDAY_LOOKBACK_DAYS: i64 = 2;

const DAYS_IN_LEAP_YEAR: i64 = 366;

/// Offset from which an occurrence counts as "almost a year ahead" on a Monday
const PREVIOUS_YEAR_OFFSET: i64 = 363;

/// Where an occurrence landed relative to the reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub occurrence: NaiveDate,
    pub delta: i64,
}

/// Place the birthday into `year`.
///
/// Feb 29 becomes Feb 28 when `year` is not a leap year. A Feb 29 birthday
/// from a non-leap birth year is malformed input and yields `None` in that
/// case; the record is skipped rather than reported.
// TODO: confirm with product owners whether malformed Feb 29 records should surface as errors
pub fn occurrence_in_year(birthday: &Birthdate, year: i32) -> Option<NaiveDate> {
    let mut day = birthday.day();
    if birthday.is_leap_day() && !is_leap_year(year) {
        if !is_leap_year(birthday.year()) {
            return None;
        }
        day = 28;
    }
    NaiveDate::from_ymd_opt(year, birthday.month(), day)
}

/// Compute the day offset of `occurrence` from `today` and check it against the window.
///
/// The window is `[0, 7)` days, or `[-2, 5)` when `today` is a Monday so that the
/// past weekend is congratulated today and the coming one waits for next Monday.
/// Occurrences near the turn of the year are moved into the adjacent year first.
pub fn place_in_window(occurrence: NaiveDate, today: NaiveDate) -> Option<Placement> {
    let is_monday = today.weekday() == Weekday::Mon;
    let min_offset = if is_monday { -MONDAY_LOOKBACK_DAYS } else { 0 };

    let mut occurrence = occurrence;
    let mut delta = (occurrence - today).num_days();

    if delta < min_offset {
        if delta < -(DAYS_IN_LEAP_YEAR - WINDOW_DAYS) {
            // early January birthday seen from late December
            occurrence = occurrence.with_year(today.year() + 1)?;
            delta = (occurrence - today).num_days();
        } else {
            return None;
        }
    } else if delta >= PREVIOUS_YEAR_OFFSET && is_monday {
        // late December birthday seen from a Monday on Jan 1 or 2
        occurrence = occurrence.with_year(today.year() - 1)?;
        delta = (occurrence - today).num_days();
    }

    if (min_offset..min_offset + WINDOW_DAYS).contains(&delta) {
        Some(Placement { occurrence, delta })
    } else {
        None
    }
}

/// Day to congratulate on: weekend birthdays move to Monday
pub fn congratulation_weekday(occurrence: NaiveDate) -> Weekday {
    match occurrence.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        weekday => weekday,
    }
}

/// Group the names of people with a birthday in the upcoming window by congratulation day.
///
/// `people` is consumed once, in order. Only days with at least one name are
/// returned, Monday first, and the names of each day are sorted.
pub fn birthdays_per_week<I, P>(people: I, today: NaiveDate) -> Vec<WeekdayBucket>
where
    I: IntoIterator<Item = P>,
    P: Borrow<Person>,
{
    let mut days: [Vec<String>; 7] = Default::default();
    debug!(%today, weekday = weekday_name(today.weekday()), "collecting birthdays");

    for person in people {
        let person = person.borrow();

        let Some(occurrence) = occurrence_in_year(&person.birthday, today.year()) else {
            trace!(name = %person.name, birthday = %person.birthday, "skipping malformed leap-day birthday");
            continue;
        };
        let Some(placement) = place_in_window(occurrence, today) else {
            trace!(name = %person.name, birthday = %person.birthday, "outside window");
            continue;
        };

        let congrats_at = congratulation_weekday(placement.occurrence);
        debug!(
            birthday = %person.birthday,
            delta = placement.delta,
            weekday = weekday_name(placement.occurrence.weekday()),
            congrats_at = weekday_name(congrats_at),
            "birthday in window"
        );
        days[congrats_at.num_days_from_monday() as usize].push(person.name.clone());
    }

    WEEK.iter()
        .zip(days)
        .filter(|(_, names)| !names.is_empty())
        .map(|(&weekday, mut names)| {
            names.sort();
            WeekdayBucket { weekday, names }
        })
        .collect()
}
