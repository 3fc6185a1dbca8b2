//! Benchmark profiles for the Wayfind routing engine.
//!
//! - [`tower_profile`]: a synthetic tower of identical floors with two
//!   stair shafts, sized by the caller
//! - [`query_pairs`]: deterministic start/goal pairs over a tower

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wayfind_core::{Cell, FloorGrid, Position};
use wayfind_grid::{Building, BuildingBuilder};

/// Build a tower of `floors` square floors of side `size`.
///
/// Each floor alternates corridor bands with wall bands pierced by a door
/// every eighth column; rooms sit along the corridors. Two shafts run the
/// full height: one at `(1, 0)`, one at `(size - 2, size - 1)`.
///
/// # Panics
///
/// Panics if `floors == 0` or `size < 4`.
pub fn tower_profile(floors: usize, size: usize) -> Building {
    assert!(floors > 0 && size >= 4, "tower needs at least one 4x4 floor");
    let grids: Vec<FloorGrid> = (0..floors).map(|f| tower_floor(f, size)).collect();
    let mut builder = BuildingBuilder::new(grids).unwrap();
    for f in 1..floors {
        for (row, column) in [(1, 0), (size - 2, size - 1)] {
            builder
                .add_stair_link(
                    Position::new(f - 1, row, column),
                    Position::new(f, row, column),
                )
                .unwrap();
        }
    }
    builder.build()
}

fn tower_floor(floor: usize, size: usize) -> FloorGrid {
    (0..size)
        .map(|r| {
            (0..size)
                .map(|c| match (r % 4, c % 8) {
                    (2, door) if door != 0 => Cell::Wall,
                    (0, 4) => Cell::room(format!("F{floor}R{r}C{c}")),
                    _ => Cell::Corridor,
                })
                .collect()
        })
        .collect()
}

/// `count` deterministic start/goal pairs spread over a tower of the given
/// shape. Pairs may land on walls.
pub fn query_pairs(floors: usize, size: usize, count: usize) -> Vec<(Position, Position)> {
    let pick = |i: u64| {
        Position::new(
            (i.wrapping_mul(2862933555777941757) % floors as u64) as usize,
            (i.wrapping_mul(6364136223846793007) % size as u64) as usize,
            (i.wrapping_mul(1442695040888963407) % size as u64) as usize,
        )
    };
    (0..count as u64).map(|i| (pick(i), pick(i + 500))).collect()
}
