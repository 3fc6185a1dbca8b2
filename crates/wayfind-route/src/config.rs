//! Route search configuration.

use serde::{Deserialize, Serialize};
use wayfind_core::Position;

/// Default heuristic cost charged per floor between a node and the goal.
pub const DEFAULT_FLOOR_CHANGE_WEIGHT: usize = 5;

/// Configuration for [`RouteFinder`](crate::RouteFinder).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Heuristic cost per floor between node and goal.
    ///
    /// Each stair traversal really costs 1, so any weight above 1 can
    /// overestimate and the search may return a longer-than-shortest route
    /// when several stair routes exist. Default: 5.
    pub floor_change_weight: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            floor_change_weight: DEFAULT_FLOOR_CHANGE_WEIGHT,
        }
    }
}

impl RouteConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration whose heuristic never overestimates on buildings with
    /// vertically aligned stair links, so the search returns true shortest
    /// routes there.
    pub fn admissible() -> Self {
        Self {
            floor_change_weight: 1,
        }
    }

    /// Builder-style setter for the floor-change weight.
    pub fn with_floor_change_weight(mut self, weight: usize) -> Self {
        self.floor_change_weight = weight;
        self
    }

    /// Returns `true` if the floor weight is at most the real stair cost.
    pub fn is_admissible(&self) -> bool {
        self.floor_change_weight <= 1
    }

    /// Estimated remaining cost from `node` to `goal`.
    pub fn estimate(&self, node: &Position, goal: &Position) -> usize {
        node.in_floor_distance(goal) + self.floor_change_weight * node.floor_distance(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_is_five() {
        let config = RouteConfig::default();
        assert_eq!(config.floor_change_weight, 5);
        assert!(!config.is_admissible());
        assert!(RouteConfig::admissible().is_admissible());
    }

    #[test]
    fn estimate_weights_floor_distance() {
        let goal = Position::new(2, 2, 1);
        let node = Position::new(0, 7, 3);
        assert_eq!(RouteConfig::default().estimate(&node, &goal), 5 + 2 + 10);
        assert_eq!(RouteConfig::admissible().estimate(&node, &goal), 5 + 2 + 2);
        assert_eq!(
            RouteConfig::new()
                .with_floor_change_weight(0)
                .estimate(&node, &goal),
            7
        );
        assert_eq!(RouteConfig::default().estimate(&goal, &goal), 0);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RouteConfig::admissible();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"floor_change_weight":1}"#);
        let back: RouteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
