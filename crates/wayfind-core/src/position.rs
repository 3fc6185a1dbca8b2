//! The [`Position`] type: a cell address inside a multi-floor building.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address `(floor, row, column)` in a building.
///
/// The derived ordering is lexicographic on `(floor, row, column)`. Route
/// search relies on it as the explicit tie-break between frontier entries
/// with equal cost, and room lookup scans in the same order.
///
/// Serializes as `{"floor": n, "row": n, "column": n}`.
///
/// # Examples
///
/// ```
/// use wayfind_core::Position;
///
/// let a = Position::new(0, 7, 3);
/// let b = Position::new(1, 0, 0);
/// assert!(a < b);
/// assert_eq!(a.in_floor_distance(&Position::new(0, 5, 6)), 5);
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Floor index, `0` is the lowest floor.
    pub floor: usize,
    /// Row within the floor grid.
    pub row: usize,
    /// Column within the floor grid.
    pub column: usize,
}

impl Position {
    /// Create a position from its three components.
    pub const fn new(floor: usize, row: usize, column: usize) -> Self {
        Self { floor, row, column }
    }

    /// Manhattan distance in `(row, column)`, ignoring floors.
    pub fn in_floor_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Number of floors between `self` and `other`.
    pub fn floor_distance(&self, other: &Position) -> usize {
        self.floor.abs_diff(other.floor)
    }

    /// Returns `true` if both positions lie on the same floor.
    pub fn same_floor(&self, other: &Position) -> bool {
        self.floor == other.floor
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.floor, self.row, self.column)
    }
}

impl From<(usize, usize, usize)> for Position {
    fn from((floor, row, column): (usize, usize, usize)) -> Self {
        Self::new(floor, row, column)
    }
}
