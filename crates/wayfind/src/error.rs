//! Error type for name-based navigator queries.

use std::error::Error;
use std::fmt;
use wayfind_core::GridError;

/// Which side of a query a room name was given for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomRole {
    /// A plain lookup.
    Lookup,
    /// The start of a route.
    Start,
    /// The end of a route.
    End,
}

impl fmt::Display for RoomRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => write!(f, "room"),
            Self::Start => write!(f, "start room"),
            Self::End => write!(f, "end room"),
        }
    }
}

/// Errors from [`Navigator`](crate::Navigator) queries that take room names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// No room cell carries the requested name.
    RoomNotFound {
        /// The name that was looked up.
        name: String,
        /// What the name was used for.
        role: RoomRole,
    },
    /// A position handed to the building was rejected.
    Grid(GridError),
}

impl QueryError {
    /// Returns `true` for errors a request boundary should answer as
    /// "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound { .. })
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoomNotFound { name, role } => write!(f, "{role} not found: {name:?}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RoomNotFound { .. } => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for QueryError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
