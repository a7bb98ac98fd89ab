//! # Vehicle Rental Demo
//!
//! Walks the factory flow once: select a region, ask it for a vehicle, start
//! it, price the rental, stop it, and print the quote.
//!
//! The quote is the only thing written to stdout; logs and notifications go to
//! stderr, so `--json` output can be piped straight into a JSON parser.
//!
//! ```bash
//! vehicle-rental --region us --vehicle car --days 2
//! vehicle-rental --region asia --vehicle truck --json
//! ```

use std::process::ExitCode;

use clap::Parser;
use rental_factory_recipe::runtime::{parse_days, rent, setup_tracing, RentalQuote};
use tracing::info_span;

#[derive(Debug, Parser)]
#[command(name = "vehicle-rental", version, about = "Rent a vehicle through a regional factory")]
struct Args {
    /// Rental region: us, eu or asia
    #[arg(long, default_value = "us")]
    region: String,

    /// Vehicle type: car, bike or truck
    #[arg(long, default_value = "car")]
    vehicle: String,

    /// Number of rental days; anything that is not a number is priced as NaN
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    days: String,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    setup_tracing();

    let args = Args::parse();
    let _span = info_span!("rental", region = %args.region, vehicle = %args.vehicle).entered();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Rents the requested vehicle and renders the quote for stdout.
fn run(args: &Args) -> Result<String, String> {
    let quote = rent(&args.region, &args.vehicle, parse_days(&args.days))
        .map_err(|e| e.to_string())?;
    render(&quote, args.json)
}

fn render(quote: &RentalQuote, json: bool) -> Result<String, String> {
    if json {
        serde_json::to_string_pretty(quote).map_err(|e| e.to_string())
    } else {
        Ok(quote.to_string())
    }
}
