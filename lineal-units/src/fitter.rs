//! Best-fit unit selection over a bounds table

use lineal_core::Distance;

use crate::catalogue::UnitTable;
use crate::unit::UnitFamily;

/// Selects the display unit for a distance from a bounds table.
pub trait UnitFitter {
    /// Returns the unit whose range contains the distance, or `None` if no
    /// row matches. Built-in tables partition the whole axis, so `None`
    /// only happens with partial user-supplied tables.
    fn find_fit<U: UnitFamily>(&self, table: &UnitTable<U>, distance: &Distance) -> Option<U>;
}

/// Fitter returning the first row whose range contains the distance.
///
/// Tables are ordered smallest unit first, so with a contiguous table the
/// first match is also the unique match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InRangeUnitFitter;

impl UnitFitter for InRangeUnitFitter {
    fn find_fit<U: UnitFamily>(&self, table: &UnitTable<U>, distance: &Distance) -> Option<U> {
        table
            .rows()
            .iter()
            .find(|row| row.contains(distance))
            .map(|row| row.unit())
    }
}
