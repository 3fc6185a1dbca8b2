//! Topology compliance test helpers.
//!
//! These functions verify that a [`Topology`] implementation satisfies the
//! invariants route search depends on. Reused across the building and
//! projection test modules.

use crate::building::Building;
use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that every neighbour is in bounds and passable.
pub fn assert_neighbours_passable(topology: &dyn Topology) {
    for coord in topology.canonical_ordering() {
        for nb in topology.neighbours(&coord) {
            assert!(topology.contains(&nb), "neighbour {nb} of {coord} is out of bounds");
            assert!(topology.is_passable(&nb), "neighbour {nb} of {coord} is a wall");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)` for
/// passable `a`.
pub fn assert_neighbours_symmetric(topology: &dyn Topology) {
    for coord in topology.canonical_ordering() {
        if !topology.is_passable(&coord) {
            continue;
        }
        for nb in topology.neighbours(&coord) {
            let nb_neighbours = topology.neighbours(&nb);
            assert!(
                nb_neighbours.contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that in-floor neighbours are exactly one step away.
pub fn assert_in_floor_steps_are_unit(topology: &dyn Topology) {
    for coord in topology.canonical_ordering() {
        for nb in topology.neighbours(&coord) {
            if nb.same_floor(&coord) {
                assert_eq!(
                    coord.in_floor_distance(&nb),
                    1,
                    "{nb} listed as in-floor neighbour of {coord}"
                );
            }
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(topology: &dyn Topology) {
    let a = topology.canonical_ordering();
    let b = topology.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique,
/// sorted positions.
pub fn assert_canonical_ordering_complete(topology: &dyn Topology) {
    let ordering = topology.canonical_ordering();
    assert_eq!(
        ordering.len(),
        topology.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        topology.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        topology.cell_count(),
        "canonical_ordering has duplicates"
    );
    assert!(
        ordering.windows(2).all(|w| w[0] < w[1]),
        "canonical_ordering is not floor, row, column order"
    );
}

/// Assert that rendering a building does not alter any cell.
pub fn assert_render_is_pure(building: &Building) {
    let before = building.floors().to_vec();
    let rendered = building.view().render();
    assert_eq!(building.floors(), before.as_slice(), "render mutated the building");
    for coord in building.canonical_ordering() {
        let cell = building.cell_at(&coord).expect("canonical position in bounds");
        assert_eq!(rendered.get(&coord), Some(cell.display()));
    }
}

/// Assert that the stair table is symmetric and every landing is a stair cell.
pub fn assert_stairs_consistent(building: &Building) {
    assert!(building.stairs().is_symmetric(), "stair table is asymmetric");
    for link in building.stair_links() {
        assert!(building.stairs().is_landing(&link.a), "{link}: {} is not a landing", link.a);
        assert!(building.stairs().is_landing(&link.b), "{link}: {} is not a landing", link.b);
    }
    for landing in building.stairs().landings() {
        let cell = building.cell_at(landing).expect("landing in bounds");
        assert!(cell.is_stair(), "landing {landing} holds {cell:?}");
    }
}

/// Run every compliance check on a building.
pub fn run_full_compliance(building: &Building) {
    assert_neighbours_passable(building);
    assert_neighbours_symmetric(building);
    assert_in_floor_steps_are_unit(building);
    assert_canonical_ordering_deterministic(building);
    assert_canonical_ordering_complete(building);
    assert_render_is_pure(building);
    assert_stairs_consistent(building);
}
