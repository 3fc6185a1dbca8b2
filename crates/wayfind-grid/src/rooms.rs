//! Room-name lookup.

use crate::building::Building;
use wayfind_core::Position;

/// Resolves room names to positions by scanning the building.
///
/// Scan order is floor ascending, then row, then column. Room codes are not
/// required to be unique; the first match in scan order wins. Holds only a
/// borrow of the building, no state of its own.
#[derive(Clone, Copy, Debug)]
pub struct RoomIndex<'a> {
    building: &'a Building,
}

impl<'a> RoomIndex<'a> {
    /// Lookup over `building`.
    pub fn new(building: &'a Building) -> Self {
        Self { building }
    }

    /// Position of the first room cell named `name`.
    ///
    /// `None` is an expected outcome (an unknown or misspelled room), not a
    /// failure.
    pub fn find_room(&self, name: &str) -> Option<Position> {
        self.rooms()
            .find(|(_, room)| *room == name)
            .map(|(position, _)| position)
    }

    /// Returns `true` if some room cell is named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.find_room(name).is_some()
    }

    /// Every room cell with its name, in scan order.
    pub fn rooms(&self) -> impl Iterator<Item = (Position, &'a str)> + 'a {
        self.building
            .floors()
            .iter()
            .enumerate()
            .flat_map(|(floor, grid)| {
                grid.iter().enumerate().flat_map(move |(row, cells)| {
                    cells.iter().enumerate().filter_map(move |(column, cell)| {
                        cell.room_name()
                            .map(|name| (Position::new(floor, row, column), name))
                    })
                })
            })
    }
}
