//! Boundary response shapes.

use serde::Serialize;
use wayfind_core::Position;
use wayfind_route::Route;

/// Answer to a route query, serialized as `{"route": [...]}`.
///
/// An empty list means no route exists. A route from a room to itself is a
/// one-element list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    /// Positions from start to goal inclusive.
    pub route: Vec<Position>,
}

impl RouteResponse {
    /// Returns `true` if no route was found.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

impl From<Option<Route>> for RouteResponse {
    fn from(route: Option<Route>) -> Self {
        Self {
            route: route.map(Route::into_positions).unwrap_or_default(),
        }
    }
}
