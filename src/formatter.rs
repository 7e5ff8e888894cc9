//! Calendar formatting and display.

use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::Weekday;

use crate::types::{
    CELL_WIDTH, DAYS_PER_WEEK, MONTH_NAMES, MonthLayout, Params, TITLE_MONTH_WIDTH,
    TITLE_YEAR_WIDTH, WEEKDAY_NAMES,
};

/// Get the English month name.
pub fn get_month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Get the 3-letter English weekday abbreviation.
pub fn get_weekday_short_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Get weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..order.len() {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Format the title line: year field followed by the right-aligned month name.
pub fn format_title(year: i32, month: u32) -> String {
    format!(
        " {:>yw$} {:>mw$}\n",
        year,
        get_month_name(month),
        yw = TITLE_YEAR_WIDTH,
        mw = TITLE_MONTH_WIDTH
    )
}

/// Format weekday header row starting at `week_start`.
pub fn format_weekday_headers(week_start: Weekday) -> String {
    let mut result = String::with_capacity(CELL_WIDTH * 7 + 1);
    for weekday in get_weekday_order(week_start) {
        let _ = write!(
            result,
            "{:>width$}",
            get_weekday_short_name(weekday),
            width = CELL_WIDTH
        );
    }
    result.push('\n');
    result
}

/// Format the day grid: blank cells, then day numbers, seven cells per row.
///
/// A trailing newline always follows the last day, so a month ending in the
/// last column is followed by an empty line.
pub fn format_month_grid(layout: &MonthLayout) -> String {
    let mut result = String::with_capacity(CELL_WIDTH * 8 * layout.row_count() as usize);
    let mut column = 1;

    for _ in 0..layout.leading_gaps {
        result.push_str(&" ".repeat(CELL_WIDTH));
        column += 1;
    }

    for day in 1..=layout.days_in_month {
        let _ = write!(result, "{:>width$}", day, width = CELL_WIDTH);
        column += 1;
        if column > DAYS_PER_WEEK {
            result.push('\n');
            column = 1;
        }
    }

    result.push('\n');
    result
}

/// Render the whole month: title, weekday header and grid.
pub fn render_month(params: &Params) -> String {
    let layout = MonthLayout::new(params);
    let mut out = format_title(params.year, params.month);
    out.push_str(&format_weekday_headers(params.week_start()));
    out.push_str(&format_month_grid(&layout));
    out
}

/// Print a single month to standard output.
pub fn print_month(params: &Params) -> io::Result<()> {
    let rendered = render_month(params);
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()
}
