//! Type definitions and constants for calendar formatting.

use chrono::Weekday;

/// Resolved invocation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Year, always positive.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// ISO weekday shown in the first column (1 = Monday .. 7 = Sunday).
    pub first_weekday: u32,
}

impl Params {
    /// First weekday as a `chrono::Weekday`.
    pub fn week_start(&self) -> Weekday {
        (1..self.first_weekday).fold(Weekday::Mon, |day, _| day.succ())
    }
}

/// Grid shape of a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    /// Blank cells before day 1 (0-6).
    pub leading_gaps: u32,
    /// Number of days in the month (28-31).
    pub days_in_month: u32,
}

impl MonthLayout {
    /// Total grid cells, blanks included.
    pub fn cell_count(&self) -> u32 {
        self.leading_gaps + self.days_in_month
    }

    pub fn row_count(&self) -> u32 {
        self.cell_count().div_ceil(DAYS_PER_WEEK)
    }
}

// Constants for calendar formatting
pub const DAYS_PER_WEEK: u32 = 7;
pub const CELL_WIDTH: usize = 4;
pub const TITLE_YEAR_WIDTH: usize = 4;
pub const TITLE_MONTH_WIDTH: usize = 22;

pub const DEFAULT_FIRST_WEEKDAY: u32 = 1;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter English weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
