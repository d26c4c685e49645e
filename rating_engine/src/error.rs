//! Error type for the rating engine.
//!
//! The `RatingError` enum carries the single validation failure the engine can
//! produce. Every other unusual input (unknown town, unknown body type, absent
//! model, oversized discount) is handled by graceful fallback instead, so
//! callers never see an error for those.
use thiserror::Error;

/// Validation error returned by the rating engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The vehicle value is below the minimum acceptable for its body type.
    ///
    /// Carries the threshold that was violated (15,000 ZMW for motorcycles,
    /// 35,000 ZMW otherwise). The message is intended to be shown to the end
    /// user verbatim.
    #[error("Vehicle value cannot be less than {minimum:.2} ZMW")]
    BelowMinimumValue {
        /// Minimum acceptable vehicle value for the requested body type.
        minimum: f64,
    },
}
