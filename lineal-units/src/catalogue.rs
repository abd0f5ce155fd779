//! Applicability bounds tables for the unit families
//!
//! Each family declares, in full, the half-open range of absolute distances
//! for which each unit is the natural display unit. Within a table the
//! ranges partition `[0, +inf)`: no gaps, no overlaps, the top unit open
//! ended. `validate` asserts exactly that, since a mistyped bound is the
//! kind of error that would otherwise surface as silent misrouting.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lineal_core::Distance;

use crate::unit::{ImperialLengthUnit, SiLengthUnit, UnitFamily};

/// A bounds table rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("unit table is empty")]
    Empty,

    #[error("first unit {0} must start at zero")]
    NonZeroOrigin(&'static str),

    #[error("units {left} and {right} have non-contiguous bounds")]
    Discontiguous {
        left: &'static str,
        right: &'static str,
    },

    #[error("unit {0} is out of ordinal order")]
    OutOfOrder(&'static str),

    #[error("only the top unit may be unbounded, {0} is not the top unit")]
    PrematureUnbounded(&'static str),

    #[error("top unit {0} must be unbounded")]
    BoundedTop(&'static str),
}

/// One row of a bounds table: a unit and the absolute distance range for
/// which it is the best fit. `upper == None` marks the open-ended top unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBounds<U> {
    unit: U,
    lower: Distance,
    upper: Option<Distance>,
}

impl<U: UnitFamily> UnitBounds<U> {
    pub fn bounded(unit: U, lower: Distance, upper: Distance) -> Self {
        UnitBounds { unit, lower, upper: Some(upper) }
    }

    pub fn open(unit: U, lower: Distance) -> Self {
        UnitBounds { unit, lower, upper: None }
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn lower(&self) -> &Distance {
        &self.lower
    }

    pub fn upper(&self) -> Option<&Distance> {
        self.upper.as_ref()
    }

    /// Checks if a distance is in range of this row. Bounds compare against
    /// the absolute value, so fitting is sign-agnostic.
    pub fn contains(&self, distance: &Distance) -> bool {
        let magnitude = distance.abs();
        magnitude >= self.lower && self.upper.as_ref().is_none_or(|upper| magnitude < *upper)
    }
}

/// An ordered bounds table for one unit family (or a subset of it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTable<U> {
    rows: Vec<UnitBounds<U>>,
}

impl<U: UnitFamily> UnitTable<U> {
    /// Builds a table, rejecting any violation of the partition invariant.
    pub fn new(rows: Vec<UnitBounds<U>>) -> Result<Self, CatalogueError> {
        let table = UnitTable { rows };
        table.validate()?;
        Ok(table)
    }

    /// Asserts the partition invariant: the first row starts at zero,
    /// adjacent rows are contiguous, ordinals strictly increase, and only
    /// the last row is unbounded.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        let first = self.rows.first().ok_or(CatalogueError::Empty)?;
        if first.lower != Distance::ZERO {
            return Err(CatalogueError::NonZeroOrigin(first.unit.unit_name()));
        }
        for pair in self.rows.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if left.unit.ordinal() >= right.unit.ordinal() {
                return Err(CatalogueError::OutOfOrder(right.unit.unit_name()));
            }
            match &left.upper {
                None => return Err(CatalogueError::PrematureUnbounded(left.unit.unit_name())),
                Some(upper) if *upper != right.lower => {
                    return Err(CatalogueError::Discontiguous {
                        left: left.unit.unit_name(),
                        right: right.unit.unit_name(),
                    });
                }
                Some(_) => {}
            }
        }
        if let Some(last) = self.rows.last() {
            if last.upper.is_some() {
                return Err(CatalogueError::BoundedTop(last.unit.unit_name()));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> &[UnitBounds<U>] {
        &self.rows
    }

    pub fn bounds_of(&self, unit: U) -> Option<&UnitBounds<U>> {
        self.rows.iter().find(|row| row.unit == unit)
    }

    /// Checks if a distance is in range of `unit` within this table.
    pub fn contains(&self, unit: U, distance: &Distance) -> bool {
        self.bounds_of(unit).is_some_and(|row| row.contains(distance))
    }

    /// The open-ended unit absorbing everything above the rest.
    pub fn top_unit(&self) -> Option<U> {
        self.rows.last().map(|row| row.unit)
    }
}

/// The full SI table, nanometer through gigameter.
pub fn si_units() -> &'static UnitTable<SiLengthUnit> {
    static TABLE: LazyLock<UnitTable<SiLengthUnit>> = LazyLock::new(|| {
        UnitTable::new(vec![
            UnitBounds::bounded(SiLengthUnit::Nanometer, Distance::ZERO, Distance::of(0, 1_000)),
            UnitBounds::bounded(
                SiLengthUnit::Micrometer,
                Distance::of(0, 1_000),
                Distance::of(0, 1_000_000),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Millimeter,
                Distance::of(0, 1_000_000),
                Distance::of(0, 10_000_000),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Centimeter,
                Distance::of(0, 10_000_000),
                Distance::of(0, 100_000_000),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Decimeter,
                Distance::of(0, 100_000_000),
                Distance::of(1, 0),
            ),
            UnitBounds::bounded(SiLengthUnit::Meter, Distance::of(1, 0), Distance::of(10, 0)),
            UnitBounds::bounded(SiLengthUnit::Decameter, Distance::of(10, 0), Distance::of(100, 0)),
            UnitBounds::bounded(
                SiLengthUnit::Hectometer,
                Distance::of(100, 0),
                Distance::of(1_000, 0),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Kilometer,
                Distance::of(1_000, 0),
                Distance::of(1_000_000, 0),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Megameter,
                Distance::of(1_000_000, 0),
                Distance::of(1_000_000_000, 0),
            ),
            UnitBounds::open(SiLengthUnit::Gigameter, Distance::of(1_000_000_000, 0)),
        ])
        .expect("built-in SI bounds table is contiguous")
    });
    &TABLE
}

/// The reduced seven-unit SI table, same abstraction, wider steps.
pub fn si_basic_units() -> &'static UnitTable<SiLengthUnit> {
    static TABLE: LazyLock<UnitTable<SiLengthUnit>> = LazyLock::new(|| {
        UnitTable::new(vec![
            UnitBounds::bounded(SiLengthUnit::Nanometer, Distance::ZERO, Distance::of(0, 1_000)),
            UnitBounds::bounded(
                SiLengthUnit::Micrometer,
                Distance::of(0, 1_000),
                Distance::of(0, 1_000_000),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Millimeter,
                Distance::of(0, 1_000_000),
                Distance::of(1, 0),
            ),
            UnitBounds::bounded(SiLengthUnit::Meter, Distance::of(1, 0), Distance::of(1_000, 0)),
            UnitBounds::bounded(
                SiLengthUnit::Kilometer,
                Distance::of(1_000, 0),
                Distance::of(1_000_000, 0),
            ),
            UnitBounds::bounded(
                SiLengthUnit::Megameter,
                Distance::of(1_000_000, 0),
                Distance::of(1_000_000_000, 0),
            ),
            UnitBounds::open(SiLengthUnit::Gigameter, Distance::of(1_000_000_000, 0)),
        ])
        .expect("built-in basic SI bounds table is contiguous")
    });
    &TABLE
}

/// The imperial table, inch through mile.
pub fn imperial_units() -> &'static UnitTable<ImperialLengthUnit> {
    static TABLE: LazyLock<UnitTable<ImperialLengthUnit>> = LazyLock::new(|| {
        UnitTable::new(vec![
            UnitBounds::bounded(
                ImperialLengthUnit::Inch,
                Distance::ZERO,
                Distance::of(0, 304_800_000),
            ),
            UnitBounds::bounded(
                ImperialLengthUnit::Foot,
                Distance::of(0, 304_800_000),
                Distance::of(0, 914_400_000),
            ),
            UnitBounds::bounded(
                ImperialLengthUnit::Yard,
                Distance::of(0, 914_400_000),
                Distance::of(1_609, 344_000_000),
            ),
            UnitBounds::open(ImperialLengthUnit::Mile, Distance::of(1_609, 344_000_000)),
        ])
        .expect("built-in imperial bounds table is contiguous")
    });
    &TABLE
}
