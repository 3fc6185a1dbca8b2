//! The query facade over a frozen building.

use crate::campus;
use crate::error::{QueryError, RoomRole};
use crate::response::RouteResponse;
use std::sync::Arc;
use wayfind_core::{GridError, Position};
use wayfind_grid::{Building, RenderedMap, Topology};
use wayfind_route::{Route, RouteConfig, RouteFinder};

/// Answers room lookups, route queries and map renders for one building.
///
/// The building is frozen before it reaches the navigator and shared behind
/// an [`Arc`], so clones are cheap and every query takes `&self`. A
/// navigator can be handed to any number of threads without locking.
///
/// # Examples
///
/// ```
/// use wayfind::{Navigator, Position};
///
/// let nav = Navigator::campus().unwrap();
/// assert_eq!(nav.resolve_room("DBMS"), Some(Position::new(2, 2, 1)));
///
/// let response = nav.route_between_rooms("BEE", "DBMS").unwrap();
/// assert_eq!(response.route.first(), Some(&Position::new(0, 0, 1)));
/// assert_eq!(response.route.last(), Some(&Position::new(2, 2, 1)));
/// ```
#[derive(Clone, Debug)]
pub struct Navigator {
    building: Arc<Building>,
    config: RouteConfig,
}

impl Navigator {
    /// Navigator over `building` with the default route configuration.
    pub fn new(building: impl Into<Arc<Building>>) -> Self {
        Self::with_config(building, RouteConfig::default())
    }

    /// Navigator over `building` with an explicit route configuration.
    pub fn with_config(building: impl Into<Arc<Building>>, config: RouteConfig) -> Self {
        let building = building.into();
        tracing::info!(
            floors = building.floor_count(),
            floor_size = building.floor_size(),
            stair_links = building.stair_links().len(),
            floor_change_weight = config.floor_change_weight,
            "navigator ready"
        );
        Self { building, config }
    }

    /// Navigator over the bundled campus dataset.
    pub fn campus() -> Result<Self, GridError> {
        Ok(Self::new(campus::building()?))
    }

    /// The shared building.
    pub fn building(&self) -> &Arc<Building> {
        &self.building
    }

    /// The route configuration in use.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Position of the first room named `name`, scanning floors, then rows,
    /// then columns.
    pub fn resolve_room(&self, name: &str) -> Option<Position> {
        let found = self.building.rooms().find_room(name);
        if found.is_none() {
            tracing::warn!(room = name, "room not found");
        }
        found
    }

    /// Like [`resolve_room`](Self::resolve_room), but a miss is an error.
    pub fn locate_room(&self, name: &str) -> Result<Position, QueryError> {
        self.resolve_as(name, RoomRole::Lookup)
    }

    /// Route between two positions.
    ///
    /// `Ok(None)` means the goal is unreachable. Positions outside the
    /// building are errors.
    pub fn route(&self, start: Position, goal: Position) -> Result<Option<Route>, GridError> {
        RouteFinder::with_config(self.building.as_ref(), self.config.clone())
            .find_route(start, goal)
    }

    /// Resolve two room names and route between them.
    ///
    /// Each unknown name is reported with its role, start first. An
    /// unreachable destination is an empty response, not an error.
    pub fn route_between_rooms(
        &self,
        start_name: &str,
        end_name: &str,
    ) -> Result<RouteResponse, QueryError> {
        let start = self.resolve_as(start_name, RoomRole::Start)?;
        let goal = self.resolve_as(end_name, RoomRole::End)?;
        Ok(self.route(start, goal)?.into())
    }

    /// Render every floor as display strings.
    pub fn render_map(&self) -> RenderedMap {
        self.building.view().render()
    }

    fn resolve_as(&self, name: &str, role: RoomRole) -> Result<Position, QueryError> {
        self.resolve_room(name).ok_or_else(|| QueryError::RoomNotFound {
            name: name.to_owned(),
            role,
        })
    }
}
