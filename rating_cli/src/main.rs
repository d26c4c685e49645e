//! Premium rating CLI — a thin caller around the rating engine.
//!
//! Collects the rated attributes as command-line options (with the same range
//! bounds the original input form enforced), builds a `QuoteRequest`, prices it
//! once, and prints either the quoted premium or the validation error.
//!
//! Usage example:
//! ```bash
//! rating_cli --age 30 --vehicle-use private --town Lusaka \
//!     --vehicle-value 35000 --body-type Sedan --mileage 50000
//! ```
//!
//! The engine's only error is the minimum-vehicle-value check; it is printed
//! verbatim to stderr and the process exits nonzero. Every other unusual input
//! (unknown town, unknown body type or model) still yields a quote.
#![warn(missing_docs)]
mod args;

use clap::Parser;
use log::info;
use rating_engine::engine::CURRENCY;
use rating_engine::{QuoteRequest, RatingEngine};

use crate::args::Args;

fn main() {
    init_logger();
    let args = Args::parse();

    let mut request = QuoteRequest::new(
        args.age,
        args.vehicle_use,
        &args.town,
        args.vehicle_value,
        &args.body_type,
        args.mileage,
    )
    .with_long_term_discount(args.long_term_discount)
    .with_vehicle_quantity(args.vehicle_quantity);
    if let Some(model) = &args.vehicle_model {
        request = request.with_model(model);
    }

    let engine = RatingEngine::with_builtin_tables(args.mileage_banding);
    info!(
        "Pricing {} vehicle(s), banding: {}",
        request.vehicle_quantity, args.mileage_banding
    );

    match engine.price(&request) {
        Ok(quote) => {
            if args.json {
                let payload = serde_json::json!({
                    "premium": quote.formatted(),
                    "currency": CURRENCY,
                });
                println!("{}", payload);
            } else {
                println!(
                    "The calculated premium for your vehicle(s) is: {}",
                    quote.with_currency()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
