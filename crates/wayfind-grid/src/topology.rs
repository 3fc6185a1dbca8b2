//! The `Topology` trait: the graph view route search walks over.

use crate::grid2d;
use smallvec::SmallVec;
use wayfind_core::{GridError, Position};

/// Neighbour list: up to four in-floor steps plus stair partners.
pub type Neighbours = SmallVec<[Position; 8]>;

/// A stack of equally sized square floors seen as a unit-cost graph.
///
/// Route search and the test oracles only talk to a building through this
/// trait, so they stay independent of how cells are stored.
///
/// # Thread Safety
///
/// `Sync` is required so a frozen topology can be shared behind an `Arc`
/// and queried from many request handlers at once.
pub trait Topology: Send + Sync {
    /// Number of floors.
    fn floor_count(&self) -> usize;

    /// Side length of every floor.
    fn floor_size(&self) -> usize;

    /// Returns `true` if the cell at `position` can be stood on.
    ///
    /// Out-of-bounds positions are not passable.
    fn is_passable(&self, position: &Position) -> bool;

    /// Enumerate the cells reachable from `position` in one step.
    ///
    /// Returns the passable in-floor neighbours in
    /// [`AXIS_OFFSETS`](grid2d::AXIS_OFFSETS) order, then the stair
    /// partners of `position` in link insertion order. Every edge costs 1.
    /// Out-of-bounds positions have no neighbours.
    fn neighbours(&self, position: &Position) -> Neighbours;

    /// Returns `true` if `position` addresses a cell of this topology.
    fn contains(&self, position: &Position) -> bool {
        self.check_position(position).is_ok()
    }

    /// Validate `position`, reporting a bad floor before a bad row/column.
    fn check_position(&self, position: &Position) -> Result<(), GridError> {
        grid2d::check_bounds(position, self.floor_count(), self.floor_size())
    }

    /// Total number of cells across all floors.
    fn cell_count(&self) -> usize {
        self.floor_count() * self.floor_size() * self.floor_size()
    }

    /// All cells in floor, row, column order.
    ///
    /// Two calls on the same topology return the same sequence.
    fn canonical_ordering(&self) -> Vec<Position> {
        grid2d::canonical_ordering(self.floor_count(), self.floor_size())
    }
}
