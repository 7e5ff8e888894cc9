//! Error type shared by argument resolution and output.

use std::io;

/// Everything that can stop a calendar from being printed.
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    /// Wrong number of positional arguments (only 0, 2 or 3 are accepted).
    #[error("expected no arguments, <year> <month> or <year> <month> <first-weekday>, got {0} argument(s)")]
    InvalidArgumentCount(usize),

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("invalid year: {0} (must be greater than 0)")]
    InvalidYear(i64),

    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(i64),

    #[error("invalid first weekday: {0} (must be 1-7, 1 = Monday)")]
    InvalidFirstWeekday(i64),

    /// Writing the calendar to standard output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
