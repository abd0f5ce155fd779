//! Lineal Units - Length unit catalogues and measured lengths
//!
//! Provides the sealed SI and imperial unit families, their applicability
//! bounds tables, the best-fit unit selection algorithm, and `Length` -
//! a distance paired with the unit it is currently expressed in.

mod catalogue;
mod fitter;
mod length;
mod unit;

pub use catalogue::{imperial_units, si_basic_units, si_units};
pub use catalogue::{CatalogueError, UnitBounds, UnitTable};
pub use fitter::{InRangeUnitFitter, UnitFitter};
pub use length::{Length, ToLength};
pub use unit::{ImperialLengthUnit, LengthUnit, SiLengthUnit, UnitFamily};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ImperialLengthUnit, InRangeUnitFitter, Length, LengthUnit, SiLengthUnit, ToLength,
        UnitFamily, UnitFitter,
    };
}
