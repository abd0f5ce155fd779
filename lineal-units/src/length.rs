//! A distance expressed in a concrete unit

use std::fmt;

use dashu_base::Abs;
use dashu_int::IBig;
use serde::{Deserialize, Serialize};

use lineal_core::{scale, Distance};

use crate::catalogue::{imperial_units, si_units};
use crate::fitter::{InRangeUnitFitter, UnitFitter};
use crate::unit::LengthUnit;

/// A [`Distance`] paired with the unit it is currently expressed in.
///
/// The distance itself stays exact and unit independent; the unit only
/// decides how [`measure_floored`](Length::measure_floored) and
/// [`measure_decimal`](Length::measure_decimal) read it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Length {
    distance: Distance,
    unit: LengthUnit,
}

impl Length {
    pub fn new(distance: Distance, unit: impl Into<LengthUnit>) -> Self {
        Length { distance, unit: unit.into() }
    }

    pub fn distance(&self) -> &Distance {
        &self.distance
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The same distance read out in another unit. No numeric conversion
    /// happens here, the distance is exact either way.
    pub fn with_unit(&self, unit: impl Into<LengthUnit>) -> Length {
        Length { distance: self.distance.clone(), unit: unit.into() }
    }

    /// The whole number of units in this length, truncated toward zero.
    /// `-1.9` meters measures as `-1`.
    pub fn measure_floored(&self) -> IBig {
        self.distance.total_nanometers() / self.unit.nanos_per_unit()
    }

    /// The decimal count of units in this length at a fixed scale of nine
    /// fractional digits, truncated toward zero.
    pub fn measure_decimal(&self) -> String {
        let scaled = self.distance.total_nanometers() * IBig::from(scale::NANOS_PER_METER)
            / self.unit.nanos_per_unit();
        let negative = scaled < IBig::ZERO;
        let magnitude = scaled.abs();
        let billion = IBig::from(scale::NANOS_PER_METER);
        let whole = &magnitude / &billion;
        let frac = magnitude - &whole * &billion;
        let frac = u64::try_from(frac).unwrap_or(0);
        let sign = if negative { "-" } else { "" };
        format!("{sign}{whole}.{frac:09}")
    }

    /// Re-expresses this length in the unit of its own family whose range
    /// contains the distance. Stays within the family: an imperial length
    /// refits among imperial units, an SI length among SI units.
    pub fn best_fit(&self) -> Length {
        let fitter = InRangeUnitFitter;
        let fitted = match self.unit {
            LengthUnit::Si(_) => fitter
                .find_fit(si_units(), &self.distance)
                .map(LengthUnit::from),
            LengthUnit::Imperial(_) => fitter
                .find_fit(imperial_units(), &self.distance)
                .map(LengthUnit::from),
        };
        match fitted {
            Some(unit) => self.with_unit(unit),
            None => self.clone(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.measure_decimal(), self.unit.symbol())
    }
}

/// Pairs a distance with a unit without consuming it.
pub trait ToLength {
    fn to_length(&self, unit: impl Into<LengthUnit>) -> Length;
}

impl ToLength for Distance {
    fn to_length(&self, unit: impl Into<LengthUnit>) -> Length {
        Length::new(self.clone(), unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{ImperialLengthUnit, SiLengthUnit, UnitFamily};

    fn si_composite() -> Distance {
        Distance::of_gigameters(1)
            + Distance::of_megameters(1)
            + Distance::of_kilometers(1)
            + Distance::of_meters(1)
            + Distance::of_millimeters(1)
            + Distance::of_micrometers(1)
            + Distance::of_nanometers(1)
    }

    #[test]
    fn test_floored_measure_per_si_unit() {
        let d = si_composite();
        let cases = [
            (SiLengthUnit::Gigameter, 1i64),
            (SiLengthUnit::Megameter, 1_001),
            (SiLengthUnit::Kilometer, 1_001_001),
            (SiLengthUnit::Meter, 1_001_001_001),
        ];
        for (unit, expected) in cases {
            assert_eq!(d.to_length(unit).measure_floored(), IBig::from(expected), "{unit}");
        }
        assert_eq!(
            d.to_length(SiLengthUnit::Nanometer).measure_floored(),
            IBig::from(1_001_001_001_001_001_001i64),
        );
    }

    #[test]
    fn test_floored_measure_per_imperial_unit() {
        let d = Distance::of_miles(1)
            + Distance::of_yards(1)
            + Distance::of_feet(1)
            + Distance::of_inches(1);
        let cases = [
            (ImperialLengthUnit::Mile, 1i64),
            (ImperialLengthUnit::Yard, 1_761),
            (ImperialLengthUnit::Foot, 5_284),
            (ImperialLengthUnit::Inch, 63_409),
        ];
        for (unit, expected) in cases {
            assert_eq!(d.to_length(unit).measure_floored(), IBig::from(expected), "{unit}");
        }
    }

    #[test]
    fn test_floored_measure_truncates_toward_zero() {
        let d = Distance::parse_meters("-12.36").unwrap();
        assert_eq!(d.to_length(SiLengthUnit::Meter).measure_floored(), IBig::from(-12));
        let just_under = Distance::of(1, 999_999_999);
        assert_eq!(just_under.to_length(SiLengthUnit::Meter).measure_floored(), IBig::from(1));
    }

    #[test]
    fn test_floored_round_trip_for_each_unit() {
        for unit in SiLengthUnit::ALL {
            let length = unit.to_distance(1_234).to_length(unit);
            assert_eq!(length.measure_floored(), IBig::from(1_234), "{unit}");
        }
        for unit in ImperialLengthUnit::ALL {
            let length = unit.to_distance(i64::MAX).to_length(unit);
            assert_eq!(length.measure_floored(), IBig::from(i64::MAX), "{unit}");
        }
    }

    #[test]
    fn test_decimal_measure_has_fixed_scale() {
        let d = Distance::parse_meters("12.36").unwrap();
        assert_eq!(d.to_length(SiLengthUnit::Meter).measure_decimal(), "12.360000000");
        assert_eq!(Distance::ZERO.to_length(SiLengthUnit::Meter).measure_decimal(), "0.000000000");
    }

    #[test]
    fn test_decimal_measure_truncates() {
        // 1 nm in meters has no tenth digit to truncate; 1 nm in inches does.
        let one_nm = Distance::EPSILON.to_length(ImperialLengthUnit::Inch);
        // 1 / 25_400_000 in = 0.0000000393700... truncated at scale 9
        assert_eq!(one_nm.measure_decimal(), "0.000000039");

        let negative = Distance::of_nanometers(-1).to_length(ImperialLengthUnit::Inch);
        assert_eq!(negative.measure_decimal(), "-0.000000039");
    }

    #[test]
    fn test_decimal_measure_imperial() {
        let d = Distance::of_inches(3);
        assert_eq!(d.to_length(ImperialLengthUnit::Inch).measure_decimal(), "3.000000000");
        assert_eq!(d.to_length(ImperialLengthUnit::Foot).measure_decimal(), "0.250000000");
    }

    #[test]
    fn test_with_unit_keeps_distance_exact() {
        let length = Distance::of_kilometers(2).to_length(SiLengthUnit::Kilometer);
        let in_meters = length.with_unit(SiLengthUnit::Meter);
        assert_eq!(in_meters.distance(), length.distance());
        assert_eq!(in_meters.measure_floored(), IBig::from(2_000));
    }

    #[test]
    fn test_best_fit_stays_in_family() {
        let d = Distance::of_meters(5_000);
        let si = d.to_length(SiLengthUnit::Meter).best_fit();
        assert_eq!(si.unit(), LengthUnit::Si(SiLengthUnit::Kilometer));

        let imperial = d.to_length(ImperialLengthUnit::Inch).best_fit();
        assert_eq!(imperial.unit(), LengthUnit::Imperial(ImperialLengthUnit::Mile));
    }

    #[test]
    fn test_best_fit_is_sign_agnostic() {
        let d = Distance::of_meters(-50);
        let fitted = d.to_length(SiLengthUnit::Meter).best_fit();
        assert_eq!(fitted.unit(), LengthUnit::Si(SiLengthUnit::Decameter));
        assert_eq!(fitted.distance(), &d);
    }

    #[test]
    fn test_best_fit_zero_picks_smallest_unit() {
        let zero_si = Distance::ZERO.to_length(SiLengthUnit::Gigameter).best_fit();
        assert_eq!(zero_si.unit(), LengthUnit::Si(SiLengthUnit::Nanometer));

        let zero_imperial = Distance::ZERO.to_length(ImperialLengthUnit::Mile).best_fit();
        assert_eq!(zero_imperial.unit(), LengthUnit::Imperial(ImperialLengthUnit::Inch));
    }

    #[test]
    fn test_display() {
        let d = Distance::parse_meters("12.36").unwrap();
        assert_eq!(d.to_length(SiLengthUnit::Meter).to_string(), "12.360000000m");
    }

    #[test]
    fn test_serde_round_trip() {
        let length = Distance::of_yards(3).to_length(ImperialLengthUnit::Yard);
        let json = serde_json::to_string(&length).unwrap();
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back, length);
    }
}
