//! Best-first route search over a [`Topology`].

use crate::config::RouteConfig;
use crate::route::Route;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use wayfind_core::{GridError, Position};
use wayfind_grid::Topology;

/// Route search over a borrowed topology.
///
/// Holds no state between calls; every [`find_route`](Self::find_route)
/// is a self-contained search, so one finder can serve any number of
/// queries, from any number of threads.
///
/// # Algorithm
///
/// Classic A*: the frontier is a min-heap keyed on `(f, position)` with
/// `f = g + h`, where `g` is the number of edges walked from the start and
/// `h` is [`RouteConfig::estimate`]. Ties on `f` pop the smallest position
/// in floor, row, column order. Neighbours are expanded in
/// [`Topology::neighbours`] order and a predecessor is only replaced by a
/// strictly cheaper one.
///
/// Improved costs are pushed as new frontier entries; entries made stale by
/// a later improvement are skipped when popped.
#[derive(Clone, Debug)]
pub struct RouteFinder<'a, T: Topology + ?Sized> {
    topology: &'a T,
    config: RouteConfig,
}

impl<'a, T: Topology + ?Sized> RouteFinder<'a, T> {
    /// Finder with the default configuration.
    pub fn new(topology: &'a T) -> Self {
        Self::with_config(topology, RouteConfig::default())
    }

    /// Finder with an explicit configuration.
    pub fn with_config(topology: &'a T, config: RouteConfig) -> Self {
        Self { topology, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Search for a route from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached, and
    /// `Ok(Some(route))` with `route.positions() == [start]` when
    /// `start == goal`. Positions outside the topology are rejected with the
    /// same errors as [`Topology::check_position`].
    pub fn find_route(&self, start: Position, goal: Position) -> Result<Option<Route>, GridError> {
        self.topology.check_position(&start)?;
        self.topology.check_position(&goal)?;
        if start == goal {
            return Ok(Some(Route::single(start)));
        }

        let estimate = |p: &Position| self.config.estimate(p, &goal);
        let mut frontier: BinaryHeap<Reverse<(usize, Position)>> = BinaryHeap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut g_score: HashMap<Position, usize> = HashMap::new();
        let mut expanded = 0usize;

        g_score.insert(start, 0);
        frontier.push(Reverse((estimate(&start), start)));

        while let Some(Reverse((f, current))) = frontier.pop() {
            let g = g_score[&current];
            if f > g + estimate(&current) {
                continue;
            }
            if current == goal {
                let route = reconstruct(&came_from, current);
                tracing::debug!(
                    %start,
                    %goal,
                    cost = route.cost(),
                    floor_changes = route.floor_changes(),
                    expanded,
                    "route found"
                );
                return Ok(Some(route));
            }
            expanded += 1;

            let tentative = g + 1;
            for next in self.topology.neighbours(&current) {
                if g_score.get(&next).is_none_or(|&best| tentative < best) {
                    came_from.insert(next, current);
                    g_score.insert(next, tentative);
                    frontier.push(Reverse((tentative + estimate(&next), next)));
                }
            }
        }

        tracing::debug!(%start, %goal, expanded, "no route");
        Ok(None)
    }
}

/// Walk predecessors back from `goal` and reverse.
fn reconstruct(came_from: &HashMap<Position, Position>, goal: Position) -> Route {
    let mut positions = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        positions.push(previous);
        current = previous;
    }
    positions.reverse();
    Route::from_walk(positions)
}
