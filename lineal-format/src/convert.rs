//! Conversion strategies
//!
//! A converter re-expresses a length before formatting, typically to move
//! it into the unit a reader expects. Factories decide applicability;
//! the pipeline asks each in turn and the first accepting factory wins.

use std::sync::Arc;

use lineal_units::Length;

/// Re-expresses a length. The distance must be preserved exactly, only the
/// display unit may change.
pub trait LengthConverter: Send + Sync {
    fn convert(&self, length: &Length) -> Length;
}

/// Decides whether a converter applies to a given length.
pub trait ConverterFactory: Send + Sync {
    /// Returns a converter for this length, or `None` to decline and let
    /// the next factory in the chain inspect it.
    fn converter_for(&self, length: &Length) -> Option<Arc<dyn LengthConverter>>;
}

/// Converter that re-fits a length to the best unit of its own family.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFitConverter;

impl LengthConverter for AutoFitConverter {
    fn convert(&self, length: &Length) -> Length {
        length.best_fit()
    }
}

/// Factory for [`AutoFitConverter`]. Accepts every length; registered as
/// the pipeline's fallback tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFitConverterFactory;

impl ConverterFactory for AutoFitConverterFactory {
    fn converter_for(&self, _length: &Length) -> Option<Arc<dyn LengthConverter>> {
        Some(Arc::new(AutoFitConverter))
    }
}
