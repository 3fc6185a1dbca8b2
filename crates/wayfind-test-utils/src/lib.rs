//! Test utilities for Wayfind development.
//!
//! Provides compact builders for synthetic buildings ([`floor`],
//! [`building`]), a breadth-first reference oracle ([`bfs_distance`]) to
//! check route search against, route validity assertions, and proptest
//! strategies for random buildings.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;
pub mod strategies;

pub use fixtures::{building, floor};
pub use oracle::{assert_valid_route, bfs_distance};
pub use strategies::{arb_building, arb_route_case};
