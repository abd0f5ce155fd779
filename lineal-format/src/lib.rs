//! Lineal Format - Conversion and formatting strategies for lengths
//!
//! Lengths are rendered through pluggable strategy chains: converters pick
//! the unit a length should be shown in, formatters turn it into text.
//! Both are resolved through a [`Pipeline`], an explicit registry the
//! caller owns and passes around.

mod context;
mod convert;
mod format;
mod registry;

pub use context::{FormatContext, TextDirection};
pub use convert::{AutoFitConverter, AutoFitConverterFactory, ConverterFactory, LengthConverter};
pub use format::{
    AutoFormatter, AutoFormatterFactory, FlooredFormatter, FormatterFactory, ImperialFormatter,
    ImperialFormatterFactory, LengthFormatter,
};
pub use registry::{FormatError, Pipeline};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ConverterFactory, FormatContext, FormatError, FormatterFactory, LengthConverter,
        LengthFormatter, Pipeline, TextDirection,
    };
}
