//! Proptest strategies for random buildings and route queries.

use proptest::prelude::*;
use std::collections::BTreeSet;
use wayfind_core::{Cell, FloorGrid, Position};
use wayfind_grid::{Building, BuildingBuilder, Topology};

/// Random buildings of up to `max_floors` floors of up to `max_size` cells
/// square.
///
/// Roughly 70% of cells are open. Stair links always join the same row and
/// column on adjacent floors, so a floor-change weight of 1 stays an
/// admissible estimate.
pub fn arb_building(max_floors: usize, max_size: usize) -> impl Strategy<Value = Building> {
    (1..=max_floors.max(1), 1..=max_size.max(1))
        .prop_flat_map(|(floors, size)| {
            let cells = prop::collection::vec(prop::bool::weighted(0.7), floors * size * size);
            let max_shafts = if floors > 1 { size } else { 0 };
            let shafts = prop::collection::vec(
                (0..floors.max(2) - 1, 0..size, 0..size),
                0..=max_shafts,
            );
            (Just(floors), Just(size), cells, shafts)
        })
        .prop_map(|(floors, size, open, shafts)| {
            let grids: Vec<FloorGrid> = open
                .chunks(size * size)
                .map(|floor| {
                    floor
                        .chunks(size)
                        .map(|row| {
                            row.iter()
                                .map(|&o| if o { Cell::Corridor } else { Cell::Wall })
                                .collect()
                        })
                        .collect()
                })
                .collect();
            debug_assert_eq!(grids.len(), floors);

            let mut builder = BuildingBuilder::new(grids).expect("generated layout is square");
            let unique: BTreeSet<_> = shafts.into_iter().collect();
            for (floor, row, column) in unique {
                builder
                    .add_stair_link(
                        Position::new(floor, row, column),
                        Position::new(floor + 1, row, column),
                    )
                    .expect("generated link is in bounds and unique");
            }
            builder.build()
        })
}

/// A random building together with a start and goal inside its bounds.
///
/// Start and goal may be walls or the same position.
pub fn arb_route_case(
    max_floors: usize,
    max_size: usize,
) -> impl Strategy<Value = (Building, Position, Position)> {
    arb_building(max_floors, max_size).prop_flat_map(|building| {
        let floors = building.floor_count();
        let size = building.floor_size();
        let position = move || (0..floors, 0..size, 0..size).prop_map(Position::from);
        (Just(building), position(), position())
    })
}
