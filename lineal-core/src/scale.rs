//! Nanometer ratios of the catalogued length units.
//!
//! Every supported unit is an integral number of nanometers, which is what
//! keeps all conversion math in exact integer arithmetic.

pub const NANOS_PER_METER: i64 = 1_000_000_000;

// SI
pub const NANOS_PER_NANOMETER: i64 = 1;
pub const NANOS_PER_MICROMETER: i64 = 1_000;
pub const NANOS_PER_MILLIMETER: i64 = 1_000_000;
pub const NANOS_PER_CENTIMETER: i64 = 10_000_000;
pub const NANOS_PER_DECIMETER: i64 = 100_000_000;
pub const NANOS_PER_DECAMETER: i64 = 10_000_000_000;
pub const NANOS_PER_HECTOMETER: i64 = 100_000_000_000;
pub const NANOS_PER_KILOMETER: i64 = 1_000_000_000_000;
pub const NANOS_PER_MEGAMETER: i64 = 1_000_000_000_000_000;
pub const NANOS_PER_GIGAMETER: i64 = 1_000_000_000_000_000_000;

// Imperial (international yard and pound agreement values)
pub const NANOS_PER_INCH: i64 = 25_400_000;
pub const NANOS_PER_FOOT: i64 = 304_800_000;
pub const NANOS_PER_YARD: i64 = 914_400_000;
pub const NANOS_PER_MILE: i64 = 1_609_344_000_000;
