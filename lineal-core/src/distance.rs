//! Exact distance values using dashu
//!
//! A distance is a whole-meter count (arbitrary precision, signed) plus a
//! nanometer remainder in `[0, 1e9)`. The remainder is always non-negative;
//! negative values carry their sign in the meter term (floor normalization),
//! so -5 nm is stored as `meters = -1, nanos = 999_999_995` and stays
//! distinct from +5 nm.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use dashu_base::Abs;
use dashu_int::IBig;
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scale;
use crate::DistanceError;

/// Exact, signed length value independent of display unit.
///
/// All operations are exact at nanometer resolution - never floating point.
/// Arithmetic is total: the meter term is an arbitrary precision integer
/// with no overflow ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distance {
    meters: IBig,
    nanos: u32,
}

impl Distance {
    /// A distance of no length.
    pub const ZERO: Distance = Distance { meters: IBig::ZERO, nanos: 0 };

    /// The smallest representable increment, exactly one nanometer.
    pub const EPSILON: Distance = Distance { meters: IBig::ZERO, nanos: 1 };

    // ========== Construction ==========

    /// Normalizing factory. Accepts a nanometer term of any magnitude and
    /// sign and carries its overflow or underflow into the meter term until
    /// the remainder lands in `[0, 1e9)`.
    pub fn of(meters: impl Into<IBig>, nanos: impl Into<IBig>) -> Self {
        let total = meters.into() * Self::billion() + nanos.into();
        Self::from_total_nanometers(total)
    }

    /// Builds a distance from its total nanometer count.
    pub fn from_total_nanometers(total: IBig) -> Self {
        let billion = Self::billion();
        let mut meters = &total / &billion;
        let mut remainder = total - &meters * &billion;
        if remainder < IBig::ZERO {
            meters = meters - IBig::ONE;
            remainder = remainder + billion;
        }
        let nanos = u32::try_from(remainder).expect("floor remainder is within nanometer range");
        Distance { meters, nanos }
    }

    /// Builds a distance as `count` units of `nanos_per_unit` nanometers,
    /// exactly.
    pub fn from_unit_count(count: impl Into<IBig>, nanos_per_unit: &IBig) -> Self {
        Self::from_total_nanometers(count.into() * nanos_per_unit)
    }

    /// Parses a signed decimal count of a unit with the given nanometer
    /// ratio. The value is scaled in exact integer arithmetic and rounded
    /// half away from zero only at the final nanometer boundary.
    pub fn from_scaled_decimal(text: &str, nanos_per_unit: &IBig) -> Result<Self, DistanceError> {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(DistanceError::Parse(text.to_string()));
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(DistanceError::Parse(text.to_string()));
        }

        let mantissa: IBig = format!("{int_part}{frac_part}")
            .parse()
            .map_err(|_| DistanceError::Parse(text.to_string()))?;
        let mut denominator = IBig::ONE;
        for _ in 0..frac_part.len() {
            denominator = denominator * IBig::from(10u8);
        }

        let scaled = mantissa * nanos_per_unit;
        let half = &denominator / IBig::from(2u8);
        let total = (scaled + half) / denominator;
        let total = if negative { -total } else { total };
        Ok(Self::from_total_nanometers(total))
    }

    /// Parses a signed decimal meter value, e.g. `"12.36"` or `"-0.000000005"`.
    pub fn parse_meters(text: &str) -> Result<Self, DistanceError> {
        Self::from_scaled_decimal(text, &IBig::from(scale::NANOS_PER_METER))
    }

    // SI factories

    pub fn of_nanometers(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_NANOMETER))
    }

    pub fn of_micrometers(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_MICROMETER))
    }

    pub fn of_millimeters(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_MILLIMETER))
    }

    pub fn of_centimeters(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_CENTIMETER))
    }

    pub fn of_decimeters(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_DECIMETER))
    }

    pub fn of_meters(count: impl Into<IBig>) -> Self {
        Self::of(count, 0)
    }

    pub fn of_decameters(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_DECAMETER))
    }

    pub fn of_hectometers(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_HECTOMETER))
    }

    pub fn of_kilometers(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_KILOMETER))
    }

    pub fn of_megameters(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_MEGAMETER))
    }

    pub fn of_gigameters(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_GIGAMETER))
    }

    // Imperial factories

    pub fn of_inches(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_INCH))
    }

    pub fn of_feet(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_FOOT))
    }

    pub fn of_yards(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_YARD))
    }

    pub fn of_miles(count: impl Into<IBig>) -> Self {
        Self::from_unit_count(count, &IBig::from(scale::NANOS_PER_MILE))
    }

    // ========== Accessors ==========

    /// The whole-meter term. Negative distances carry their sign here.
    pub fn whole_meters(&self) -> &IBig {
        &self.meters
    }

    /// The fractional-meter remainder in nanometers, always in `[0, 1e9)`.
    pub fn subunit_nanos(&self) -> u32 {
        self.nanos
    }

    /// The value of this distance as a total nanometer count.
    pub fn total_nanometers(&self) -> IBig {
        &self.meters * Self::billion() + IBig::from(self.nanos)
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.nanos == 0 && self.meters == IBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.meters < IBig::ZERO
    }

    // ========== Arithmetic ==========

    /// Absolute value.
    pub fn abs(&self) -> Distance {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Scales this distance by an exact rational, e.g. a unit ratio.
    ///
    /// The multiplication runs entirely in nanometer-scaled integer
    /// arithmetic; the result is rounded half away from zero at nanometer
    /// resolution, never mid-computation.
    pub fn checked_mul_ratio(&self, ratio: &RBig) -> Result<Distance, DistanceError> {
        let (numerator, denominator) = ratio.clone().into_parts();
        let denominator = IBig::from(denominator);
        if denominator == IBig::ZERO {
            return Err(DistanceError::ZeroDenominator);
        }

        let scaled = self.total_nanometers() * numerator;
        let negative = scaled < IBig::ZERO;
        let magnitude = scaled.abs();
        let half = &denominator / IBig::from(2u8);
        let total = (magnitude + half) / denominator;
        let total = if negative { -total } else { total };
        Ok(Self::from_total_nanometers(total))
    }

    fn billion() -> IBig {
        IBig::from(scale::NANOS_PER_METER)
    }
}

// ========== Operators ==========

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        let mut meters = self.meters + rhs.meters;
        let mut nanos = u64::from(self.nanos) + u64::from(rhs.nanos);
        // Carry nanometer overflow into the meter term.
        if nanos >= scale::NANOS_PER_METER as u64 {
            meters = meters + IBig::ONE;
            nanos -= scale::NANOS_PER_METER as u64;
        }
        Distance { meters, nanos: nanos as u32 }
    }
}

impl Add for &Distance {
    type Output = Distance;

    fn add(self, rhs: &Distance) -> Distance {
        self.clone() + rhs.clone()
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        self + (-rhs)
    }
}

impl Sub for &Distance {
    type Output = Distance;

    fn sub(self, rhs: &Distance) -> Distance {
        self.clone() - rhs.clone()
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        if self.nanos == 0 {
            Distance { meters: -self.meters, nanos: 0 }
        } else {
            // Borrow one meter so the remainder stays non-negative.
            Distance {
                meters: -self.meters - IBig::ONE,
                nanos: scale::NANOS_PER_METER as u32 - self.nanos,
            }
        }
    }
}

impl Neg for &Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        -self.clone()
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        // Floor normal form makes (meters, nanos) lexicographic order total.
        self.meters.cmp(&other.meters).then(self.nanos.cmp(&other.nanos))
    }
}

// ========== Display / parsing / serde ==========

impl fmt::Display for Distance {
    /// Renders the canonical signed decimal meter value, trailing zeros
    /// trimmed, e.g. `-12.36` or `0.000000005`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_nanometers();
        let negative = total < IBig::ZERO;
        let magnitude = total.abs();
        let billion = Self::billion();
        let whole = &magnitude / &billion;
        let frac = magnitude - &whole * &billion;
        let frac = u64::try_from(frac).map_err(|_| fmt::Error)?;

        if negative {
            write!(f, "-")?;
        }
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:09}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Distance {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_meters(s)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_meters(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashu_int::UBig;

    fn nanos_invariant(d: &Distance) -> bool {
        d.subunit_nanos() < 1_000_000_000
    }

    #[test]
    fn test_factory_carries_overflow() {
        let d = Distance::of(1, 2_500_000_000i64);
        assert_eq!(d, Distance::of(3, 500_000_000));
        assert!(nanos_invariant(&d));
    }

    #[test]
    fn test_factory_borrows_underflow() {
        let d = Distance::of(3, -500_000_000);
        assert_eq!(d, Distance::of(2, 500_000_000));
        assert!(nanos_invariant(&d));
    }

    #[test]
    fn test_negative_subunit_value_is_distinct() {
        let positive = Distance::of_nanometers(5);
        let negative = Distance::of_nanometers(-5);

        assert_ne!(positive, negative);
        assert!(negative.is_negative());
        assert_eq!(negative.whole_meters(), &IBig::from(-1));
        assert_eq!(negative.subunit_nanos(), 999_999_995);
        assert_eq!(negative.total_nanometers(), IBig::from(-5));
    }

    #[test]
    fn test_additive_identity() {
        let d = Distance::of(12, 360_000_000);
        assert_eq!(&d + &Distance::ZERO, d);
    }

    #[test]
    fn test_additive_inverse() {
        let d = Distance::of(12, 360_000_000);
        assert_eq!(d.clone() + (-d), Distance::ZERO);

        let sub_meter = Distance::of_nanometers(-7);
        assert_eq!(&sub_meter + &(-&sub_meter), Distance::ZERO);
    }

    #[test]
    fn test_addition_commutes_with_mixed_signs() {
        let samples = [
            Distance::of(4, 999_999_999),
            Distance::of_nanometers(-1),
            Distance::of_meters(-3),
            Distance::of(0, 1),
            Distance::of_kilometers(7),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(a + b, b + a);
                assert!(nanos_invariant(&(a + b)));
            }
        }
    }

    #[test]
    fn test_addition_associates() {
        let a = Distance::of(1, 999_999_999);
        let b = Distance::of_nanometers(-3);
        let c = Distance::of(-2, 500_000_000);
        assert_eq!((&a + &b) + c.clone(), a + (&b + &c));
    }

    #[test]
    fn test_subtraction_carries() {
        let a = Distance::of_meters(1);
        let b = Distance::EPSILON;
        assert_eq!(a - b, Distance::of(0, 999_999_999));
    }

    #[test]
    fn test_epsilon_is_one_nanometer() {
        assert_eq!(Distance::EPSILON, Distance::of_nanometers(1));
        assert_eq!(Distance::ZERO + Distance::EPSILON, Distance::of(0, 1));
    }

    #[test]
    fn test_abs() {
        let d = Distance::parse_meters("-12.36").unwrap();
        assert_eq!(d.abs(), Distance::parse_meters("12.36").unwrap());
        assert_eq!(Distance::ZERO.abs(), Distance::ZERO);
    }

    #[test]
    fn test_total_order() {
        let mut distances = vec![
            Distance::of_meters(1),
            Distance::of_nanometers(-5),
            Distance::ZERO,
            Distance::of(0, 999_999_999),
            Distance::of_meters(-2),
        ];
        distances.sort();
        assert_eq!(
            distances,
            vec![
                Distance::of_meters(-2),
                Distance::of_nanometers(-5),
                Distance::ZERO,
                Distance::of(0, 999_999_999),
                Distance::of_meters(1),
            ],
        );
    }

    #[test]
    fn test_imperial_construction_inches() {
        // Reference values for the international inch (25.4 mm).
        let cases = [
            (0i64, Distance::ZERO),
            (1, Distance::of(0, 25_400_000)),
            (7, Distance::of(0, 177_800_000)),
            (25, Distance::of(0, 635_000_000)),
            (133, Distance::of(3, 378_200_000)),
            (1_680, Distance::of(42, 672_000_000)),
            (131_296, Distance::of(3_334, 918_400_000)),
            (i64::MAX, Distance::of(234_273_649_736_111_305i64, 497_800_000)),
        ];
        for (inches, expected) in cases {
            assert_eq!(Distance::of_inches(inches), expected, "{inches} inches");
        }
    }

    #[test]
    fn test_imperial_construction_feet_yards_miles() {
        assert_eq!(Distance::of_feet(7), Distance::of(2, 133_600_000));
        assert_eq!(Distance::of_feet(131_296), Distance::of(40_019, 20_800_000));
        assert_eq!(Distance::of_yards(1_680), Distance::of(1_536, 192_000_000));
        assert_eq!(Distance::of_miles(1), Distance::of(1_609, 344_000_000));
        assert_eq!(Distance::of_miles(131_296), Distance::of(211_300_429, 824_000_000));
    }

    #[test]
    fn test_si_factories_compose() {
        let d = Distance::of_gigameters(1)
            + Distance::of_megameters(2)
            + Distance::of_kilometers(3)
            + Distance::of_meters(4)
            + Distance::of_millimeters(5)
            + Distance::of_micrometers(6)
            + Distance::of_nanometers(7);
        assert_eq!(d, Distance::of(1_002_003_004i64, 5_006_007));
    }

    #[test]
    fn test_parse_meters() {
        assert_eq!(Distance::parse_meters("12.36").unwrap(), Distance::of(12, 360_000_000));
        assert_eq!(Distance::parse_meters("-12.36").unwrap(), -Distance::of(12, 360_000_000));
        assert_eq!(Distance::parse_meters("0.000000001").unwrap(), Distance::EPSILON);
        assert_eq!(Distance::parse_meters("42").unwrap(), Distance::of_meters(42));
        assert_eq!(Distance::parse_meters(".5").unwrap(), Distance::of(0, 500_000_000));
    }

    #[test]
    fn test_parse_rounds_at_nanometer_boundary() {
        // Tenth digit rounds half away from zero, only at the end.
        assert_eq!(
            Distance::parse_meters("0.0000000015").unwrap(),
            Distance::of_nanometers(2),
        );
        assert_eq!(
            Distance::parse_meters("-0.0000000015").unwrap(),
            Distance::of_nanometers(-2),
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", ".", "--1", "1.2.3", "12a", "1,5"] {
            assert!(Distance::parse_meters(text).is_err(), "{text:?} should fail");
        }
    }

    #[test]
    fn test_fractional_scaled_decimal() {
        let inch = IBig::from(crate::scale::NANOS_PER_INCH);
        // 11.99 in = 304_546_000 nm, exactly.
        assert_eq!(
            Distance::from_scaled_decimal("11.99", &inch).unwrap(),
            Distance::of(0, 304_546_000),
        );
    }

    #[test]
    fn test_mul_ratio_is_exact_for_unit_ratios() {
        let d = Distance::of_yards(1_760);
        let identity = RBig::from_parts(IBig::from(1), UBig::from(1u8));
        assert_eq!(d.checked_mul_ratio(&identity).unwrap(), d);

        let half = RBig::from_parts(IBig::from(1), UBig::from(2u8));
        assert_eq!(
            Distance::of_meters(5).checked_mul_ratio(&half).unwrap(),
            Distance::of(2, 500_000_000),
        );
    }

    #[test]
    fn test_mul_ratio_rounds_half_away_from_zero() {
        let third = RBig::from_parts(IBig::from(1), UBig::from(3u8));
        let d = Distance::of_nanometers(5);
        // 5/3 nm rounds to 2 nm.
        assert_eq!(d.checked_mul_ratio(&third).unwrap(), Distance::of_nanometers(2));
        assert_eq!(
            (-d).checked_mul_ratio(&third).unwrap(),
            Distance::of_nanometers(-2),
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let samples = [
            Distance::ZERO,
            Distance::EPSILON,
            Distance::of(12, 360_000_000),
            Distance::of_nanometers(-5),
            Distance::of_gigameters(3),
        ];
        for d in samples {
            let text = d.to_string();
            assert_eq!(Distance::parse_meters(&text).unwrap(), d, "{text}");
        }
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Distance::of(12, 360_000_000).to_string(), "12.36");
        assert_eq!(Distance::of_nanometers(-5).to_string(), "-0.000000005");
        assert_eq!(Distance::of_meters(42).to_string(), "42");
    }

    #[test]
    fn test_serde_round_trip() {
        let d = Distance::parse_meters("-12.36").unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"-12.36\"");
        let back: Distance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
