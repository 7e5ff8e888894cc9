//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! monthcal            // Current month, Monday first
//! monthcal 2024 2     // February 2024, Monday first
//! monthcal 2024 2 7   // February 2024, Sunday first
//! ```

use monthcal::args::Args;
use monthcal::error::CalError;
use monthcal::formatter::print_month;
use monthcal::logging;
use monthcal::types::Params;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("monthcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let params = Params::from_args(args)?;
    tracing::debug!(
        year = params.year,
        month = params.month,
        first_weekday = params.first_weekday,
        "resolved parameters"
    );

    print_month(&params)?;
    Ok(())
}
