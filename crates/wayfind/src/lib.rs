//! Wayfind: indoor wayfinding across multi-floor buildings.
//!
//! This is the top-level facade crate. It re-exports the public API of the
//! Wayfind sub-crates and adds the [`Navigator`], which answers the three
//! questions a campus front end asks: where is a room, how do I get from one
//! room to another, and what does the map look like.
//!
//! # Quick start
//!
//! ```rust
//! use wayfind::prelude::*;
//!
//! let nav = Navigator::campus().unwrap();
//!
//! let dbms = nav.resolve_room("DBMS").unwrap();
//! assert_eq!(dbms, Position::new(2, 2, 1));
//!
//! let from = nav.resolve_room("BEE").unwrap();
//! let route = nav.route(from, dbms).unwrap().expect("campus is connected");
//! assert_eq!(route.floor_changes(), 2);
//!
//! let map = nav.render_map();
//! assert_eq!(map.get(&dbms), Some("DBMS"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wayfind-core` | `Position`, `Cell`, `GridError` |
//! | [`grid`] | `wayfind-grid` | `Building`, stair links, room lookup, rendering |
//! | [`routing`] | `wayfind-route` | `RouteFinder`, `RouteConfig`, `Route` |
//! | [`campus`] | this crate | the bundled three-floor campus |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod campus;
pub mod error;
pub mod navigator;
pub mod response;

/// Core value types (`wayfind-core`).
pub use wayfind_core as types;

/// Buildings, stair links and read-only projections (`wayfind-grid`).
///
/// The [`grid::Topology`] trait is the seam route search walks over.
pub use wayfind_grid as grid;

/// Route search (`wayfind-route`).
pub use wayfind_route as routing;

pub use error::{QueryError, RoomRole};
pub use navigator::Navigator;
pub use response::RouteResponse;
pub use wayfind_core::{Cell, GridError, Position};

/// Common imports for typical Wayfind usage.
pub mod prelude {
    pub use crate::{Navigator, QueryError, RouteResponse};

    pub use wayfind_core::{Cell, GridError, Position};

    pub use wayfind_grid::{Building, BuildingBuilder, RenderedMap, Topology};

    pub use wayfind_route::{Route, RouteConfig, RouteFinder};
}
