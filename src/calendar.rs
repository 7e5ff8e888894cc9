//! Calendar calculation logic using Zeller's congruence on the proleptic Gregorian calendar.
//!
//! Weekdays are ISO numbers throughout: 1 = Monday .. 7 = Sunday. Inputs are
//! expected to be validated already (see [`crate::args::resolve_params`]).

use crate::types::{DAYS_PER_WEEK, MonthLayout, Params};

/// Divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// ISO weekday of the first day of `month` in `year`.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    let m = i64::from(if month < 3 { month + 12 } else { month });
    let year_z = if month < 3 { year as i64 - 1 } else { year as i64 };
    let k = year_z.rem_euclid(100);
    let j = year_z.div_euclid(100);

    let h = (1 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, ..., 6=Fri
    ((h + 5) % 7 + 1) as u32
}

/// Length of `month`: the day before the 1st of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Column (1-7) of `iso_weekday` when the week starts on `first_weekday`.
pub fn rotate_weekday(iso_weekday: u32, first_weekday: u32) -> u32 {
    (iso_weekday + DAYS_PER_WEEK - first_weekday) % DAYS_PER_WEEK + 1
}

/// Blank cells before day 1 in the first row.
pub fn leading_gaps(year: i32, month: u32, first_weekday: u32) -> u32 {
    rotate_weekday(first_weekday_of_month(year, month), first_weekday) - 1
}

impl MonthLayout {
    /// Build the grid shape for the month described by `params`.
    pub fn new(params: &Params) -> Self {
        let layout = MonthLayout {
            leading_gaps: leading_gaps(params.year, params.month, params.first_weekday),
            days_in_month: days_in_month(params.year, params.month),
        };
        tracing::trace!(
            year = params.year,
            month = params.month,
            leading_gaps = layout.leading_gaps,
            days_in_month = layout.days_in_month,
            "computed month layout"
        );
        layout
    }
}
