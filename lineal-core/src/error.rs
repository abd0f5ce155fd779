//! Errors for distance construction and scaling.

use thiserror::Error;

/// Error type for distance operations.
///
/// Arithmetic on already constructed distances is total; only parsing and
/// rational scaling can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error("invalid decimal quantity: {0}")]
    Parse(String),

    #[error("scaling ratio has a zero denominator")]
    ZeroDenominator,
}
