//! Command-line arguments for the premium rating CLI.
//!
//! This module defines the CLI interface using `clap`. Range validation of the
//! numeric inputs lives here, upstream of the engine, so the engine itself only
//! enforces the minimum-vehicle-value rule. See `main` for end-to-end usage.
use clap::Parser;
use rating_engine::{MileageBanding, VehicleUse};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Driver age in years.
    #[clap(long, value_parser = clap::value_parser!(u32).range(18..=100))]
    pub age: u32,

    /// Vehicle use: private or commercial.
    #[clap(long, value_enum)]
    pub vehicle_use: VehicleUse,

    /// Town where the vehicle is kept. Unlisted towns carry no adjustment.
    #[clap(long)]
    pub town: String,

    /// Vehicle value in ZMW.
    #[clap(long)]
    pub vehicle_value: f64,

    /// Vehicle body type (e.g. "Sedan", "SUV", "Motorcycle").
    #[clap(long)]
    pub body_type: String,

    /// Vehicle mileage.
    #[clap(long, default_value_t = 0)]
    pub mileage: u32,

    /// Vehicle model (e.g. "Toyota Hilux"). Omit to skip the model adjustment.
    #[clap(long)]
    pub vehicle_model: Option<String>,

    /// Long-term discount in percent.
    #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=30))]
    pub long_term_discount: u8,

    /// Number of vehicles to quote.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub vehicle_quantity: u32,

    /// Mileage surcharge banding policy.
    #[clap(long, value_enum, default_value_t = MileageBanding::Graduated)]
    pub mileage_banding: MileageBanding,

    /// Print the quote as JSON instead of the human-readable line.
    #[clap(long)]
    pub json: bool,
}
