//! The [`Route`] value returned by route search.

use serde::Serialize;
use wayfind_core::Position;

/// An ordered, non-empty sequence of positions from start to goal inclusive.
///
/// Consecutive positions are one edge apart: an in-floor step or a stair
/// traversal. A route from a position to itself holds exactly that position.
///
/// Serializes as a plain array of positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    positions: Vec<Position>,
}

impl Route {
    /// Wrap a position sequence. Returns `None` if `positions` is empty.
    pub fn new(positions: Vec<Position>) -> Option<Self> {
        (!positions.is_empty()).then_some(Self { positions })
    }

    /// Wrap a walk already known to be non-empty.
    pub(crate) fn from_walk(positions: Vec<Position>) -> Self {
        debug_assert!(!positions.is_empty());
        Self { positions }
    }

    /// The zero-length route that starts and ends at `position`.
    pub fn single(position: Position) -> Self {
        Self {
            positions: vec![position],
        }
    }

    /// All positions, start first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// First position.
    pub fn start(&self) -> Position {
        self.positions[0]
    }

    /// Last position.
    pub fn goal(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Number of edges walked (positions minus one).
    pub fn cost(&self) -> usize {
        self.positions.len() - 1
    }

    /// Stair traversals as `(from, to)` pairs, in walking order.
    pub fn stair_traversals(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.positions
            .windows(2)
            .filter(|w| !w[0].same_floor(&w[1]))
            .map(|w| (w[0], w[1]))
    }

    /// Number of stair traversals.
    pub fn floor_changes(&self) -> usize {
        self.stair_traversals().count()
    }

    /// Every landing the route stands on while changing floors, in walking
    /// order. A landing shared by two consecutive traversals appears once.
    pub fn stair_positions(&self) -> Vec<Position> {
        let mut landings: Vec<Position> = Vec::new();
        for (from, to) in self.stair_traversals() {
            if landings.last() != Some(&from) {
                landings.push(from);
            }
            landings.push(to);
        }
        landings
    }

    /// Split the route into maximal runs on a single floor.
    pub fn legs(&self) -> Vec<Leg<'_>> {
        self.positions
            .chunk_by(|a, b| a.same_floor(b))
            .map(|positions| Leg {
                floor: positions[0].floor,
                positions,
            })
            .collect()
    }

    /// Consume the route, returning its positions.
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

/// A stretch of a [`Route`] that stays on one floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg<'a> {
    /// Floor walked on.
    pub floor: usize,
    /// Positions of this leg, in walking order.
    pub positions: &'a [Position],
}

impl Leg<'_> {
    /// Where the leg begins.
    pub fn entry(&self) -> Position {
        self.positions[0]
    }

    /// Where the leg ends.
    pub fn exit(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// In-floor steps taken on this leg.
    pub fn steps(&self) -> usize {
        self.positions.len() - 1
    }
}
