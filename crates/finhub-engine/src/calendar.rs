//! Calendar arithmetic shared by the projection passes.
//!
//! Two week-numbering systems coexist on purpose: [`week_of_month`] is the
//! simulator's Monday-anchored index that resets at each month boundary,
//! while the aggregator partitions days into Monday-start calendar weeks
//! that span months. They can disagree near month edges.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of days in the given calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Shifts a date by whole months, clamping the day to the target month.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

/// 1-based Monday-anchored week number within the date's calendar month.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let offset = month_start(date).weekday().num_days_from_monday();
    (date.day() - 1 + offset) / 7 + 1
}

/// First occurrence of `weekday` on or after `start`.
pub fn first_weekday_on_or_after(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let delta = (weekday.num_days_from_monday() + 7 - start.weekday().num_days_from_monday()) % 7;
    start + Duration::days(delta as i64)
}

/// Whether `date` is the final day of its month.
pub fn is_month_end(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}
