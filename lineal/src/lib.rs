//! Lineal - Exact length modeling with unit-aware conversion and formatting
//!
//! A [`Distance`] is an exact, arbitrary precision length at nanometer
//! resolution. Pair it with a unit to get a [`Length`], then run it through
//! a [`Pipeline`] to pick the best display unit and render it:
//!
//! ```
//! use lineal::prelude::*;
//! use lineal::{format_distance, Audience, Distance};
//!
//! let pipeline = Pipeline::new();
//! let ctx = FormatContext::default();
//! let d = Distance::of_meters(5_000);
//!
//! let text = format_distance(&d, Audience::Metric, &pipeline, &ctx).unwrap();
//! assert_eq!(text, "5.000000000km");
//! ```

use serde::{Deserialize, Serialize};

pub use lineal_core::{scale, Distance, DistanceError};
pub use lineal_format::{
    AutoFitConverter, AutoFitConverterFactory, AutoFormatter, AutoFormatterFactory,
    ConverterFactory, FlooredFormatter, FormatContext, FormatError, FormatterFactory,
    ImperialFormatter, ImperialFormatterFactory, LengthConverter, LengthFormatter, Pipeline,
    TextDirection,
};
pub use lineal_units::{
    imperial_units, si_basic_units, si_units, CatalogueError, ImperialLengthUnit,
    InRangeUnitFitter, Length, LengthUnit, SiLengthUnit, ToLength, UnitBounds, UnitFamily,
    UnitFitter, UnitTable,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use lineal_core::Distance;
    pub use lineal_format::prelude::*;
    pub use lineal_units::prelude::*;

    pub use crate::{format_distance, format_floored_distance, Audience};
}

/// Whose measurement habits the output should follow. Stands in for
/// whatever locale policy the embedding application uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Metric,
    Imperial,
}

impl Audience {
    fn seed_unit(self) -> LengthUnit {
        match self {
            Audience::Metric => LengthUnit::Si(SiLengthUnit::Meter),
            Audience::Imperial => LengthUnit::Imperial(ImperialLengthUnit::Yard),
        }
    }
}

/// Renders a distance for an audience: the distance is seeded into the
/// audience's unit family, run through the pipeline's conversion chain to
/// pick the display unit, then through the formatting chain.
pub fn format_distance(
    distance: &Distance,
    audience: Audience,
    pipeline: &Pipeline,
    ctx: &FormatContext,
) -> Result<String, FormatError> {
    let length = distance.to_length(audience.seed_unit());
    let converted = pipeline.convert(&length);
    pipeline.format(&converted, ctx)
}

/// Like [`format_distance`] but renders the whole-unit count directly,
/// skipping the formatter strategy scan.
pub fn format_floored_distance(
    distance: &Distance,
    audience: Audience,
    pipeline: &Pipeline,
) -> String {
    let length = distance.to_length(audience.seed_unit());
    let converted = pipeline.convert(&length);
    pipeline.format_floored(&converted)
}
