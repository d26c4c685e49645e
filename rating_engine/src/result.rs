//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! engine's `RatingError`, so functions can simply return `Result<T>`.
use crate::error::RatingError;

/// Workspace-wide `Result` alias with `RatingError` as the default error.
pub type Result<T, E = RatingError> = std::result::Result<T, E>;
