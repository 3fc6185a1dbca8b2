//! Error type for building construction and grid access.
//!
//! Every variant is a configuration defect detected while the building is
//! being assembled, or a caller passing a position that does not exist.
//! "Room not found" and "no route" are ordinary outcomes and are modelled
//! as `Option::None` by the query APIs, not as errors.

use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors arising from building construction, stair setup, or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The floor layout is malformed: no floors, empty or non-square
    /// floors, or floors of differing sizes.
    InvalidLayout {
        /// What went wrong.
        reason: String,
    },
    /// A floor index is outside `[0, num_floors)`.
    InvalidFloor {
        /// The offending floor index.
        floor: usize,
        /// Number of floors in the building.
        num_floors: usize,
    },
    /// A row or column is outside `[0, floor_size)`.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Side length of every floor.
        floor_size: usize,
    },
    /// Both stair endpoints lie on the same floor.
    InvalidStairLink {
        /// First endpoint.
        a: Position,
        /// Second endpoint.
        b: Position,
    },
    /// The pair is already linked (in either orientation).
    DuplicateStairLink {
        /// First endpoint.
        a: Position,
        /// Second endpoint.
        b: Position,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayout { reason } => write!(f, "invalid layout: {reason}"),
            Self::InvalidFloor { floor, num_floors } => {
                write!(f, "invalid floor {floor}: building has {num_floors} floors")
            }
            Self::OutOfBounds {
                position,
                floor_size,
            } => {
                write!(
                    f,
                    "position {position} out of bounds: [0, {floor_size}) x [0, {floor_size})"
                )
            }
            Self::InvalidStairLink { a, b } => {
                write!(f, "stair link {a} <-> {b} must join two different floors")
            }
            Self::DuplicateStairLink { a, b } => {
                write!(f, "stair link {a} <-> {b} already exists")
            }
        }
    }
}

impl Error for GridError {}
