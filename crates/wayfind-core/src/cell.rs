//! Cell contents and the token format used to describe floor layouts.

use std::fmt;

/// Display symbol for a wall cell.
pub const WALL_SYMBOL: &str = "X";
/// Display symbol for a corridor cell.
pub const CORRIDOR_SYMBOL: &str = ".";
/// Display symbol for a stair cell.
pub const STAIR_SYMBOL: &str = "S";

/// Returns `true` if `token` is one of the structural symbols `X`, `.`
/// or `S`.
pub fn is_structural_symbol(token: &str) -> bool {
    matches!(token, WALL_SYMBOL | CORRIDOR_SYMBOL | STAIR_SYMBOL)
}

/// One floor: a square grid of cells indexed `[row][column]`.
pub type FloorGrid = Vec<Vec<Cell>>;

/// Contents of a single grid cell.
///
/// Everything except [`Cell::Wall`] can be walked through. Room cells carry
/// their own display name, which doubles as the lookup key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable.
    Wall,
    /// Open floor.
    Corridor,
    /// A named room.
    ///
    /// The name must not be a structural symbol: it would render exactly
    /// like a wall, corridor or stair. Building construction rejects such
    /// cells.
    Room(String),
    /// Stair landing; may be linked to cells on other floors.
    Stair,
}

impl Cell {
    /// Parse a layout token.
    ///
    /// `X` is a wall, `.` a corridor and `S` a stair. Any other token is a
    /// room code.
    ///
    /// ```
    /// use wayfind_core::Cell;
    ///
    /// assert_eq!(Cell::from_token("X"), Cell::Wall);
    /// assert_eq!(Cell::from_token("S1"), Cell::Room("S1".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            WALL_SYMBOL => Self::Wall,
            CORRIDOR_SYMBOL => Self::Corridor,
            STAIR_SYMBOL => Self::Stair,
            name => Self::Room(name.to_string()),
        }
    }

    /// Convenience constructor for a room cell.
    pub fn room(name: impl Into<String>) -> Self {
        Self::Room(name.into())
    }

    /// Display value: the symbol for structural cells, the name for rooms.
    pub fn display(&self) -> &str {
        match self {
            Self::Wall => WALL_SYMBOL,
            Self::Corridor => CORRIDOR_SYMBOL,
            Self::Stair => STAIR_SYMBOL,
            Self::Room(name) => name,
        }
    }

    /// Returns `true` for every cell except walls.
    pub fn is_passable(&self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Room name, if this is a room cell.
    pub fn room_name(&self) -> Option<&str> {
        match self {
            Self::Room(name) => Some(name),
            _ => None,
        }
    }

    /// Returns `true` if this is a stair cell.
    pub fn is_stair(&self) -> bool {
        matches!(self, Self::Stair)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl From<&str> for Cell {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_tokens() {
        assert_eq!(Cell::from_token("X"), Cell::Wall);
        assert_eq!(Cell::from_token("."), Cell::Corridor);
        assert_eq!(Cell::from_token("S"), Cell::Stair);
    }

    #[test]
    fn room_tokens_keep_their_name() {
        let cell = Cell::from_token("DBMS");
        assert_eq!(cell.room_name(), Some("DBMS"));
        assert_eq!(cell.display(), "DBMS");
        // Only the bare `S` token is a stair.
        assert_eq!(Cell::from_token("S4").room_name(), Some("S4"));
    }

    #[test]
    fn only_walls_block() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Corridor.is_passable());
        assert!(Cell::Stair.is_passable());
        assert!(Cell::room("Lab1").is_passable());
    }

    #[test]
    fn structural_symbols_are_reserved() {
        for token in ["X", ".", "S"] {
            assert!(is_structural_symbol(token));
            assert!(Cell::from_token(token).room_name().is_none());
        }
        assert!(!is_structural_symbol("S1"));
        assert!(!is_structural_symbol("x"));
    }

    #[test]
    fn display_matches_tokens() {
        for token in ["X", ".", "S", "HOD"] {
            assert_eq!(Cell::from_token(token).to_string(), token);
        }
    }
}
