//! Single-month text calendar.
//!
//! Features:
//! - Proleptic Gregorian calendar for any positive year
//! - Configurable first day of the week (ISO 1 = Monday .. 7 = Sunday)
//! - Fixed-width English title, weekday header and date grid

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod types;
