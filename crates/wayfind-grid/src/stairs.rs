//! The bidirectional stair-link table.

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use wayfind_core::{GridError, Position};

/// An unordered pair of positions on two different floors, joined by a
/// unit-cost edge that can be walked in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct StairLink {
    /// First endpoint, as given when the link was added.
    pub a: Position,
    /// Second endpoint.
    pub b: Position,
}

impl StairLink {
    /// The endpoint opposite `position`, if `position` is an endpoint.
    pub fn other(&self, position: &Position) -> Option<Position> {
        if self.a == *position {
            Some(self.b)
        } else if self.b == *position {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for StairLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}

/// Symmetric adjacency table for stair links.
///
/// A landing may link to several floors (a stairwell cell on a middle floor
/// connects both down and up), so each position maps to a list of partners
/// kept in insertion order. Insertion always records both directions.
#[derive(Clone, Debug, Default)]
pub struct StairTable {
    partners: IndexMap<Position, SmallVec<[Position; 2]>>,
    links: Vec<StairLink>,
}

impl StairTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link in both directions.
    ///
    /// Endpoint validation against the floor layout is the caller's job;
    /// this only rejects same-floor pairs and pairs already present.
    pub(crate) fn insert(&mut self, a: Position, b: Position) -> Result<StairLink, GridError> {
        if a.same_floor(&b) {
            return Err(GridError::InvalidStairLink { a, b });
        }
        if self.linked(&a).contains(&b) {
            return Err(GridError::DuplicateStairLink { a, b });
        }
        self.partners.entry(a).or_default().push(b);
        self.partners.entry(b).or_default().push(a);
        let link = StairLink { a, b };
        self.links.push(link);
        Ok(link)
    }

    /// Positions linked to `position`, in insertion order.
    pub fn linked(&self, position: &Position) -> &[Position] {
        self.partners
            .get(position)
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if `position` has at least one link.
    pub fn is_landing(&self, position: &Position) -> bool {
        self.partners.contains_key(position)
    }

    /// All links in insertion order.
    pub fn links(&self) -> &[StairLink] {
        &self.links
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no links have been added.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Every landing position, in first-link order.
    pub fn landings(&self) -> impl Iterator<Item = &Position> + '_ {
        self.partners.keys()
    }

    /// Returns `true` if `b ∈ linked(a)` exactly when `a ∈ linked(b)`.
    pub fn is_symmetric(&self) -> bool {
        self.partners
            .iter()
            .all(|(a, partners)| partners.iter().all(|b| self.linked(b).contains(a)))
    }
}
