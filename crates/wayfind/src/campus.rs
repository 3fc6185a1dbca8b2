//! The bundled three-floor campus dataset.
//!
//! Three floors of 11×11 cells joined by two stairwells at rows/columns
//! `(7, 3)` and `(7, 6)`. Each stairwell's middle landing links both down
//! to floor 0 and up to floor 2.

use wayfind_core::{GridError, Position};
use wayfind_grid::{parse_floor, Building, BuildingBuilder};

/// Number of floors in the campus.
pub const FLOORS: usize = 3;

/// Side length of every campus floor.
pub const FLOOR_SIZE: usize = 11;

type Layout = [[[&'static str; FLOOR_SIZE]; FLOOR_SIZE]; FLOORS];

#[rustfmt::skip]
const LAYOUT: Layout = [
    [
        ["X",  "BEE",  "X", "Lab2", "X",   "X",    "X", "X", "X",    "X", "X"],
        ["X",  ".",    ".", ".",    "X",   "X",    "X", "X", "X",    "X", "X"],
        ["X",  "Lab1", ".", "ADE1", "X",   "CSE2", ".", "X", "X",    "X", "X"],
        ["X",  "X",    ".", "X",    "X",   "X",    ".", "X", "X",    "X", "X"],
        ["X",  "X",    ".", "X",    "TS1", "X",    ".", "X", "CSE4", "X", "X"],
        ["X",  "X",    ".", ".",    ".",   ".",    ".", ".", ".",    ".", "."],
        [".",  ".",    ".", "X",    "X",   "X",    "X", "X", "X",    "X", "X"],
        ["X",  "X",    ".", "S",    "X",   "X",    "S", "X", ".",    "X", "X"],
        ["X",  "X",    ".", "X",    ".",   ".",    ".", ".", ".",    ".", "."],
        ["EC", "X",    ".", "X",    "X",   "HOD",  "X", "X", "CSE3", "X", "X"],
        [".",  ".",    ".", "X",    "X",   "X",    "X", "X", "X",    "X", "X"],
    ],
    [
        ["X",   "AIML",    "X", "Lab3", "X",   "X",    "X", "X", "X",  "X", "X"],
        ["X",   ".",       ".", ".",    "X",   "X",    "X", "X", "X",  "X", "X"],
        ["X",   "Project", ".", "Lab4", "X",   "CSM2", ".", "X", "X",  "X", "X"],
        ["X",   "X",       ".", "X",    "X",   "X",    ".", "X", "X",  "X", "X"],
        ["X",   "X",       ".", "X",    "TS2", "X",    ".", "X", "S1", "X", "X"],
        ["X",   "X",       ".", ".",    ".",   ".",    ".", ".", ".",  ".", "."],
        ["X",   "X",       ".", "X",    "X",   "X",    "X", "X", ".",  "X", "X"],
        ["X",   "X",       ".", "S",    "X",   "X",    "S", "X", ".",  "X", "X"],
        ["X",   "X",       ".", "X",    ".",   ".",    ".", ".", ".",  ".", "."],
        ["PSS", "X",       ".", "X",    "X",   "X",    "X", "X", "S2", "X", "X"],
        [".",   ".",       ".", "X",    "X",   "X",    "X", "X", "X",  "X", "X"],
    ],
    [
        ["X",  "Lab5", "X", "Lab6", "X",   "X",    "X", "X", "X",  "X", "X"],
        ["X",  ".",    ".", ".",    "X",   "X",    "X", "X", "X",  "X", "X"],
        ["X",  "DBMS", ".", "ALCS", "X",   "CSE1", ".", "X", "X",  "X", "X"],
        ["X",  "X",    ".", "X",    "X",   "X",    ".", "X", "X",  "X", "X"],
        ["X",  "X",    ".", "X",    "TS3", "X",    ".", "X", "S3", "X", "X"],
        ["X",  "X",    ".", ".",    ".",   ".",    ".", ".", ".",  ".", "X"],
        ["X",  "X",    ".", "X",    "X",   "X",    "X", "X", ".",  "X", "X"],
        ["X",  "X",    ".", "S",    "X",   "X",    "S", "X", ".",  "X", "X"],
        ["X",  "X",    ".", "X",    ".",   ".",    ".", ".", ".",  ".", "."],
        ["AP", "X",    ".", "X",    "X",   "X",    "X", "X", "S4", "X", "X"],
        [".",  ".",    ".", "X",    "X",   "X",    "X", "X", "X",  "X", "X"],
    ],
];

/// Stair links of the west stairwell at `(7, 3)`.
pub const WEST_STAIRWELL: [(Position, Position); 2] = [
    (Position::new(0, 7, 3), Position::new(1, 7, 3)),
    (Position::new(1, 7, 3), Position::new(2, 7, 3)),
];

/// Stair links of the east stairwell at `(7, 6)`.
pub const EAST_STAIRWELL: [(Position, Position); 2] = [
    (Position::new(0, 7, 6), Position::new(1, 7, 6)),
    (Position::new(1, 7, 6), Position::new(2, 7, 6)),
];

/// The campus floor plans, without any stair links applied.
pub fn floors() -> Vec<wayfind_core::FloorGrid> {
    LAYOUT.iter().map(|floor| parse_floor(floor.iter())).collect()
}

/// The full campus: both stairwells linked on every floor.
pub fn building() -> Result<Building, GridError> {
    with_links(WEST_STAIRWELL.iter().chain(EAST_STAIRWELL.iter()))
}

/// The campus with only the given stair links applied.
///
/// Useful to study routing through a single stairwell.
pub fn with_links<'a>(
    links: impl IntoIterator<Item = &'a (Position, Position)>,
) -> Result<Building, GridError> {
    let mut builder = BuildingBuilder::new(floors())?;
    for &(a, b) in links {
        builder.add_stair_link(a, b)?;
    }
    Ok(builder.build())
}
