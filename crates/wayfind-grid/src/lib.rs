//! Multi-floor grid buildings for Wayfind.
//!
//! This crate defines the [`Topology`] trait, the graph view that route
//! search walks, along with the concrete [`Building`] and the read-only
//! projections built on top of it.
//!
//! # Construction
//!
//! A building is assembled with a [`BuildingBuilder`]: the floor layout is
//! validated up front, stair links are added one by one, and
//! [`BuildingBuilder::build`] freezes the result. A frozen [`Building`]
//! exposes no mutating methods, so it can be shared across threads once
//! published.
//!
//! # Projections
//!
//! - [`RoomIndex`]: resolve a room name to its position
//! - [`MapView`]: render the grid as display strings

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod building;
pub mod grid2d;
pub mod rooms;
pub mod stairs;
pub mod topology;
pub mod view;

#[cfg(test)]
pub(crate) mod compliance;

pub use building::{parse_floor, Building, BuildingBuilder};
pub use rooms::RoomIndex;
pub use stairs::{StairLink, StairTable};
pub use topology::{Neighbours, Topology};
pub use view::{MapView, RenderedMap};
pub use wayfind_core::{Cell, FloorGrid, GridError, Position};
