//! Lineal Core - Fundamental types
//!
//! This crate provides the numeric core used throughout Lineal:
//! - `Distance`: exact, signed length value with nanometer resolution
//! - `DistanceError`: structured errors for construction and scaling
//! - `scale`: nanometer ratios of the catalogued units

mod distance;
mod error;
pub mod scale;

pub use distance::Distance;
pub use error::DistanceError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Distance, DistanceError};
}
