//! Sealed unit families with exact conversion ratios
//!
//! Units within one family never have overlapping applicability bounds;
//! the bounds themselves live in the family's [table](crate::UnitTable).

use std::fmt;

use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Serialize};

use lineal_core::scale;
use lineal_core::{Distance, DistanceError};

use crate::catalogue::{imperial_units, si_units, UnitTable};

/// A named member of one unit family, ordered by magnitude within it.
pub trait UnitFamily:
    Copy + Clone + Eq + Ord + std::hash::Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// All units of this family in ordinal order.
    fn all() -> &'static [Self];

    /// The family's full bounds table.
    fn table() -> &'static UnitTable<Self>;

    /// Position within the family, defines the total order.
    fn ordinal(self) -> usize;

    /// The unit symbol (e.g. `"km"`, `"yd"`).
    fn symbol(self) -> &'static str;

    /// The unit name (e.g. `"kilometer"`, `"yard"`).
    fn unit_name(self) -> &'static str;

    /// Nanometers in a quantity of 1 of this unit. Integral for every
    /// catalogued unit, which keeps conversions in integer arithmetic.
    fn nanos_per_unit(self) -> IBig;

    /// Amount of meters in a quantity of 1 of this unit, as an exact
    /// rational.
    fn meter_ratio(self) -> RBig {
        RBig::from_parts(self.nanos_per_unit(), UBig::from(scale::NANOS_PER_METER as u64))
    }

    /// Builds a distance of `count` of this unit, exactly.
    fn to_distance(self, count: impl Into<IBig>) -> Distance {
        Distance::from_unit_count(count, &self.nanos_per_unit())
    }

    /// Builds a distance from a decimal count of this unit, e.g. `"11.99"`
    /// inches, rounded at nanometer resolution.
    fn to_distance_decimal(self, count: &str) -> Result<Distance, DistanceError> {
        Distance::from_scaled_decimal(count, &self.nanos_per_unit())
    }

    /// Checks if a distance is in range of this unit, against the family's
    /// full bounds table. Bounds apply to the absolute value.
    fn contains(self, distance: &Distance) -> bool {
        Self::table().contains(self, distance)
    }
}

/// Meter based units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SiLengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Decameter,
    Hectometer,
    Kilometer,
    Megameter,
    Gigameter,
}

impl SiLengthUnit {
    pub const ALL: [SiLengthUnit; 11] = [
        SiLengthUnit::Nanometer,
        SiLengthUnit::Micrometer,
        SiLengthUnit::Millimeter,
        SiLengthUnit::Centimeter,
        SiLengthUnit::Decimeter,
        SiLengthUnit::Meter,
        SiLengthUnit::Decameter,
        SiLengthUnit::Hectometer,
        SiLengthUnit::Kilometer,
        SiLengthUnit::Megameter,
        SiLengthUnit::Gigameter,
    ];

    /// The reduced seven-unit variant without the centi/deci/deca/hecto
    /// steps, used with [`si_basic_units`](crate::si_basic_units).
    pub const BASIC: [SiLengthUnit; 7] = [
        SiLengthUnit::Nanometer,
        SiLengthUnit::Micrometer,
        SiLengthUnit::Millimeter,
        SiLengthUnit::Meter,
        SiLengthUnit::Kilometer,
        SiLengthUnit::Megameter,
        SiLengthUnit::Gigameter,
    ];
}

impl UnitFamily for SiLengthUnit {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static UnitTable<Self> {
        si_units()
    }

    fn ordinal(self) -> usize {
        self as usize
    }

    fn symbol(self) -> &'static str {
        match self {
            SiLengthUnit::Nanometer => "nm",
            SiLengthUnit::Micrometer => "µm",
            SiLengthUnit::Millimeter => "mm",
            SiLengthUnit::Centimeter => "cm",
            SiLengthUnit::Decimeter => "dm",
            SiLengthUnit::Meter => "m",
            SiLengthUnit::Decameter => "dam",
            SiLengthUnit::Hectometer => "hm",
            SiLengthUnit::Kilometer => "km",
            SiLengthUnit::Megameter => "Mm",
            SiLengthUnit::Gigameter => "Gm",
        }
    }

    fn unit_name(self) -> &'static str {
        match self {
            SiLengthUnit::Nanometer => "nanometer",
            SiLengthUnit::Micrometer => "micrometer",
            SiLengthUnit::Millimeter => "millimeter",
            SiLengthUnit::Centimeter => "centimeter",
            SiLengthUnit::Decimeter => "decimeter",
            SiLengthUnit::Meter => "meter",
            SiLengthUnit::Decameter => "decameter",
            SiLengthUnit::Hectometer => "hectometer",
            SiLengthUnit::Kilometer => "kilometer",
            SiLengthUnit::Megameter => "megameter",
            SiLengthUnit::Gigameter => "gigameter",
        }
    }

    fn nanos_per_unit(self) -> IBig {
        let nanos = match self {
            SiLengthUnit::Nanometer => scale::NANOS_PER_NANOMETER,
            SiLengthUnit::Micrometer => scale::NANOS_PER_MICROMETER,
            SiLengthUnit::Millimeter => scale::NANOS_PER_MILLIMETER,
            SiLengthUnit::Centimeter => scale::NANOS_PER_CENTIMETER,
            SiLengthUnit::Decimeter => scale::NANOS_PER_DECIMETER,
            SiLengthUnit::Meter => scale::NANOS_PER_METER,
            SiLengthUnit::Decameter => scale::NANOS_PER_DECAMETER,
            SiLengthUnit::Hectometer => scale::NANOS_PER_HECTOMETER,
            SiLengthUnit::Kilometer => scale::NANOS_PER_KILOMETER,
            SiLengthUnit::Megameter => scale::NANOS_PER_MEGAMETER,
            SiLengthUnit::Gigameter => scale::NANOS_PER_GIGAMETER,
        };
        IBig::from(nanos)
    }
}

impl fmt::Display for SiLengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Basic units from the imperial system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ImperialLengthUnit {
    Inch,
    Foot,
    Yard,
    Mile,
}

impl ImperialLengthUnit {
    pub const ALL: [ImperialLengthUnit; 4] = [
        ImperialLengthUnit::Inch,
        ImperialLengthUnit::Foot,
        ImperialLengthUnit::Yard,
        ImperialLengthUnit::Mile,
    ];
}

impl UnitFamily for ImperialLengthUnit {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static UnitTable<Self> {
        imperial_units()
    }

    fn ordinal(self) -> usize {
        self as usize
    }

    fn symbol(self) -> &'static str {
        match self {
            ImperialLengthUnit::Inch => "in",
            ImperialLengthUnit::Foot => "ft",
            ImperialLengthUnit::Yard => "yd",
            ImperialLengthUnit::Mile => "mi",
        }
    }

    fn unit_name(self) -> &'static str {
        match self {
            ImperialLengthUnit::Inch => "inch",
            ImperialLengthUnit::Foot => "foot",
            ImperialLengthUnit::Yard => "yard",
            ImperialLengthUnit::Mile => "mile",
        }
    }

    fn nanos_per_unit(self) -> IBig {
        let nanos = match self {
            ImperialLengthUnit::Inch => scale::NANOS_PER_INCH,
            ImperialLengthUnit::Foot => scale::NANOS_PER_FOOT,
            ImperialLengthUnit::Yard => scale::NANOS_PER_YARD,
            ImperialLengthUnit::Mile => scale::NANOS_PER_MILE,
        };
        IBig::from(nanos)
    }
}

impl fmt::Display for ImperialLengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A length unit of either family. Used wherever family erasure is needed,
/// e.g. in the conversion and formatting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Si(SiLengthUnit),
    Imperial(ImperialLengthUnit),
}

impl LengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Si(unit) => unit.symbol(),
            LengthUnit::Imperial(unit) => unit.symbol(),
        }
    }

    pub fn unit_name(self) -> &'static str {
        match self {
            LengthUnit::Si(unit) => unit.unit_name(),
            LengthUnit::Imperial(unit) => unit.unit_name(),
        }
    }

    pub fn nanos_per_unit(self) -> IBig {
        match self {
            LengthUnit::Si(unit) => unit.nanos_per_unit(),
            LengthUnit::Imperial(unit) => unit.nanos_per_unit(),
        }
    }

    pub fn meter_ratio(self) -> RBig {
        match self {
            LengthUnit::Si(unit) => unit.meter_ratio(),
            LengthUnit::Imperial(unit) => unit.meter_ratio(),
        }
    }

    pub fn is_imperial(self) -> bool {
        matches!(self, LengthUnit::Imperial(_))
    }

    pub fn contains(self, distance: &Distance) -> bool {
        match self {
            LengthUnit::Si(unit) => unit.contains(distance),
            LengthUnit::Imperial(unit) => unit.contains(distance),
        }
    }
}

impl From<SiLengthUnit> for LengthUnit {
    fn from(unit: SiLengthUnit) -> Self {
        LengthUnit::Si(unit)
    }
}

impl From<ImperialLengthUnit> for LengthUnit {
    fn from(unit: ImperialLengthUnit) -> Self {
        LengthUnit::Imperial(unit)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_defines_family_order() {
        assert!(SiLengthUnit::Nanometer < SiLengthUnit::Gigameter);
        assert!(ImperialLengthUnit::Inch < ImperialLengthUnit::Mile);
        for pair in SiLengthUnit::ALL.windows(2) {
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
    }

    #[test]
    fn test_meter_ratio_is_exact() {
        let meter = SiLengthUnit::Meter.meter_ratio();
        assert_eq!(meter, RBig::from_parts(IBig::from(1), UBig::from(1u8)));

        let inch = ImperialLengthUnit::Inch.meter_ratio();
        // 0.0254 m = 127/5000
        assert_eq!(inch, RBig::from_parts(IBig::from(127), UBig::from(5_000u32)));
    }

    #[test]
    fn test_to_distance_matches_core_factories() {
        assert_eq!(SiLengthUnit::Kilometer.to_distance(3), Distance::of_kilometers(3));
        assert_eq!(ImperialLengthUnit::Yard.to_distance(500), Distance::of_yards(500));
    }

    #[test]
    fn test_to_distance_decimal() {
        let d = ImperialLengthUnit::Inch.to_distance_decimal("11.99").unwrap();
        assert_eq!(d, Distance::of(0, 304_546_000));
    }

    #[test]
    fn test_contains_is_sign_agnostic() {
        let unit = SiLengthUnit::Meter;
        assert!(unit.contains(&Distance::of_meters(5)));
        assert!(unit.contains(&Distance::of_meters(-5)));
        assert!(!unit.contains(&Distance::of_meters(10)));
    }

    #[test]
    fn test_combined_unit_delegates() {
        let unit: LengthUnit = SiLengthUnit::Kilometer.into();
        assert_eq!(unit.symbol(), "km");
        assert!(!unit.is_imperial());
        assert!(LengthUnit::from(ImperialLengthUnit::Mile).is_imperial());
    }

    #[test]
    fn test_serde_round_trip() {
        let unit: LengthUnit = ImperialLengthUnit::Yard.into();
        let json = serde_json::to_string(&unit).unwrap();
        let back: LengthUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
