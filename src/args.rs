//! Command-line argument parsing using clap.
//!
//! Arguments follow the `monthcal [year month [first-weekday]]` convention:
//! nothing at all, or a year and a month with an optional ISO weekday
//! (1 = Monday .. 7 = Sunday) for the first column.

use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Parser, ValueHint};

use crate::error::CalError;
use crate::types::{DEFAULT_FIRST_WEEKDAY, Params};

#[derive(Parser, Debug)]
#[command(name = "monthcal")]
#[command(about = "Displays a calendar for a single month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,

    /// Either nothing, or `<year> <month> [first-weekday]` (1 = Monday .. 7 = Sunday).
    ///
    /// Values may start with a hyphen (`-5`, `-x`).
    #[arg(
        value_name = "VALUES",
        allow_hyphen_values = true,
        value_hint = ValueHint::Other
    )]
    pub values: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month with Monday first.

Examples:
  monthcal             Display current month
  monthcal 2024 2      Display February 2024
  monthcal 2024 2 7    Display February 2024 with Sunday first";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl Params {
    /// Resolve parameters from parsed command-line arguments.
    pub fn from_args(args: &Args) -> Result<Self, CalError> {
        resolve_params(&args.values, get_today_date())
    }
}

/// Get today's date in the local time zone.
pub fn get_today_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Validate positional values and fill in defaults.
///
/// Checks run in a fixed order and the first failure wins: argument count,
/// numeric parsing of every value, then ranges for year, month and first
/// weekday.
pub fn resolve_params(values: &[String], today: NaiveDate) -> Result<Params, CalError> {
    let (year, month, first_weekday) = match values {
        [] => {
            return Ok(Params {
                year: today.year(),
                month: today.month(),
                first_weekday: DEFAULT_FIRST_WEEKDAY,
            });
        }
        [year, month] => (parse_number(year)?, parse_number(month)?, None),
        [year, month, first_weekday] => (
            parse_number(year)?,
            parse_number(month)?,
            Some(parse_number(first_weekday)?),
        ),
        _ => return Err(CalError::InvalidArgumentCount(values.len())),
    };

    let year = i32::try_from(year)
        .ok()
        .filter(|&y| y > 0)
        .ok_or(CalError::InvalidYear(year))?;
    if !(1..=12).contains(&month) {
        return Err(CalError::InvalidMonth(month));
    }
    let first_weekday = first_weekday.unwrap_or(DEFAULT_FIRST_WEEKDAY as i64);
    if !(1..=7).contains(&first_weekday) {
        return Err(CalError::InvalidFirstWeekday(first_weekday));
    }

    Ok(Params {
        year,
        month: month as u32,
        first_weekday: first_weekday as u32,
    })
}

fn parse_number(s: &str) -> Result<i64, CalError> {
    s.parse().map_err(|_| CalError::NotANumber(s.to_string()))
}
