//! Display projection of a building.

use crate::building::Building;
use serde::Serialize;
use std::fmt;
use wayfind_core::{is_structural_symbol, Position};

/// Read-only renderer over a building.
#[derive(Clone, Copy, Debug)]
pub struct MapView<'a> {
    building: &'a Building,
}

impl<'a> MapView<'a> {
    /// Renderer over `building`.
    pub fn new(building: &'a Building) -> Self {
        Self { building }
    }

    /// Render every floor as a grid of display strings.
    ///
    /// Walls, corridors and stairs render as their symbols; rooms render as
    /// their names.
    pub fn render(&self) -> RenderedMap {
        let floors = self
            .building
            .floors()
            .iter()
            .map(|grid| {
                grid.iter()
                    .map(|cells| cells.iter().map(|c| c.display().to_string()).collect())
                    .collect()
            })
            .collect();
        RenderedMap { floors }
    }
}

/// Owned render output, indexed `[floor][row][column]`.
///
/// Serializes as nested arrays of strings. `Display` prints one block per
/// floor with columns padded to the widest value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedMap {
    floors: Vec<Vec<Vec<String>>>,
}

impl RenderedMap {
    /// Rendered floors, lowest first.
    pub fn floors(&self) -> &[Vec<Vec<String>>] {
        &self.floors
    }

    /// Display value at `position`, if it exists.
    pub fn get(&self, position: &Position) -> Option<&str> {
        self.floors
            .get(position.floor)?
            .get(position.row)?
            .get(position.column)
            .map(String::as_str)
    }

    /// Every rendered value that is not a structural symbol, with its
    /// position, in floor, row, column order.
    ///
    /// Building construction rejects rooms named like a symbol, so this
    /// lists exactly the room cells.
    pub fn rooms(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.floors.iter().enumerate().flat_map(|(floor, rows)| {
            rows.iter().enumerate().flat_map(move |(row, cells)| {
                cells.iter().enumerate().filter_map(move |(column, value)| {
                    (!is_structural_symbol(value))
                        .then(|| (Position::new(floor, row, column), value.as_str()))
                })
            })
        })
    }
}

impl fmt::Display for RenderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .floors
            .iter()
            .flatten()
            .flatten()
            .map(String::len)
            .max()
            .unwrap_or(1);
        for (index, rows) in self.floors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "floor {index}")?;
            for cells in rows {
                let line: Vec<String> = cells.iter().map(|v| format!("{v:<width$}")).collect();
                writeln!(f, "{}", line.join(" ").trim_end())?;
            }
        }
        Ok(())
    }
}
