//! Shortest-route search across multi-floor buildings.
//!
//! [`RouteFinder`] runs a best-first (A*-style) search over any
//! [`Topology`](wayfind_grid::Topology), treating in-floor steps and stair
//! traversals as unit-cost edges. The result is a [`Route`]: the ordered
//! positions from start to goal, inclusive.
//!
//! # Heuristic
//!
//! The estimate is Manhattan distance on the current floor plus
//! [`RouteConfig::floor_change_weight`] per floor between node and goal.
//! The default weight of 5 biases the search towards settling floor changes
//! first; [`RouteConfig::admissible`] drops it to 1, which never
//! overestimates when stair links join the same row and column on both
//! floors.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod finder;
pub mod route;

pub use config::{RouteConfig, DEFAULT_FLOOR_CHANGE_WEIGHT};
pub use finder::RouteFinder;
pub use route::{Leg, Route};
