//! Compact ASCII builders for synthetic buildings.
//!
//! Each character of a row is one cell token: `X` wall, `.` corridor, `S`
//! stair, anything else a room named by that single character.

use wayfind_core::{Cell, FloorGrid, Position};
use wayfind_grid::{Building, BuildingBuilder};

/// Parse one floor from ASCII rows.
pub fn floor(rows: &[&str]) -> FloorGrid {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|ch| Cell::from_token(ch.encode_utf8(&mut [0u8; 4])))
                .collect()
        })
        .collect()
}

/// Build and freeze a building from ASCII floors and stair links.
///
/// Panics if the layout or any link is invalid: fixtures are expected to be
/// well-formed.
pub fn building(floors: &[&[&str]], links: &[(Position, Position)]) -> Building {
    let grids = floors.iter().map(|rows| floor(rows)).collect();
    let mut builder = BuildingBuilder::new(grids).expect("fixture layout is valid");
    for &(a, b) in links {
        builder
            .add_stair_link(a, b)
            .expect("fixture stair link is valid");
    }
    builder.build()
}
