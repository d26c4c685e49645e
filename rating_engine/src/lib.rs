//!
//! Motor insurance premium rating engine.
//!
//! This crate aggregates:
//! - `error` — the engine's validation error `RatingError`.
//! - `result` — handy `Result<T, RatingError>` alias.
//! - `tables` — immutable rate lookup tables (town, body type, model).
//! - `request` — the `QuoteRequest` rating inputs and `VehicleUse` enum.
//! - `engine` — the `RatingEngine` and its pure `price` operation.
#![warn(missing_docs)]
pub mod engine;
pub mod error;
pub mod request;
pub mod result;
pub mod tables;

pub use engine::{MileageBanding, PremiumQuote, RatingEngine};
pub use error::RatingError;
pub use request::{QuoteRequest, VehicleUse};
pub use result::Result;
pub use tables::{RateTable, RateTables};
