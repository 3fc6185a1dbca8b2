//! Reference oracles for route search.

use std::collections::{HashMap, VecDeque};
use wayfind_core::Position;
use wayfind_grid::Topology;

/// Unit-cost shortest distance from `start` to `goal` by breadth-first
/// search, or `None` if unreachable.
///
/// Deliberately naive: every edge comes from [`Topology::neighbours`], so it
/// agrees with route search on what counts as an edge and on nothing else.
pub fn bfs_distance(topology: &dyn Topology, start: Position, goal: Position) -> Option<usize> {
    let mut dist: HashMap<Position, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        if current == goal {
            return Some(d);
        }
        for nb in topology.neighbours(&current) {
            if !dist.contains_key(&nb) {
                dist.insert(nb, d + 1);
                queue.push_back(nb);
            }
        }
    }
    None
}

/// Assert that `route` is a walk from `start` to `goal` over `topology`.
///
/// Checks the endpoints, that every step follows an edge, and that no
/// position repeats.
pub fn assert_valid_route(
    topology: &dyn Topology,
    route: &[Position],
    start: Position,
    goal: Position,
) {
    assert_eq!(route.first(), Some(&start), "route does not begin at {start}");
    assert_eq!(route.last(), Some(&goal), "route does not end at {goal}");
    for w in route.windows(2) {
        assert!(
            topology.neighbours(&w[0]).contains(&w[1]),
            "step {} -> {} is not an edge",
            w[0],
            w[1]
        );
    }
    let mut seen = std::collections::HashSet::new();
    for p in route {
        assert!(seen.insert(*p), "route visits {p} twice");
    }
}
