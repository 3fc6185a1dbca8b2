//! Building construction and the frozen [`Building`] value.

use crate::grid2d;
use crate::rooms::RoomIndex;
use crate::stairs::{StairLink, StairTable};
use crate::topology::{Neighbours, Topology};
use crate::view::MapView;
use wayfind_core::{Cell, FloorGrid, GridError, Position};

/// Parse one floor from layout tokens (see [`Cell::from_token`]).
///
/// ```
/// use wayfind_grid::parse_floor;
/// use wayfind_core::Cell;
///
/// let floor = parse_floor([["X", "Lab1"], [".", "S"]]);
/// assert_eq!(floor[0][1], Cell::room("Lab1"));
/// assert_eq!(floor[1][1], Cell::Stair);
/// ```
pub fn parse_floor<R, T>(rows: impl IntoIterator<Item = R>) -> FloorGrid
where
    R: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(|t| Cell::from_token(t.as_ref())).collect())
        .collect()
}

/// Mutable building under construction.
///
/// The floor layout is validated when the builder is created. Stair links
/// are then added one at a time; each addition rewrites both endpoint cells
/// to [`Cell::Stair`]. Call [`build`](Self::build) once every link is in
/// place: the resulting [`Building`] can no longer change.
///
/// # Examples
///
/// ```
/// use wayfind_grid::{parse_floor, BuildingBuilder, Topology};
/// use wayfind_core::{Cell, Position};
///
/// let ground = parse_floor([[".", "."], ["Hall", "."]]);
/// let upper = parse_floor([[".", "."], ["Lab", "."]]);
///
/// let mut builder = BuildingBuilder::new(vec![ground, upper]).unwrap();
/// builder
///     .add_stair_link(Position::new(0, 0, 0), Position::new(1, 0, 0))
///     .unwrap();
/// let building = builder.build();
///
/// assert_eq!(building.floor_count(), 2);
/// assert_eq!(building.cell_at(&Position::new(1, 0, 0)).unwrap(), &Cell::Stair);
/// ```
#[derive(Clone, Debug)]
pub struct BuildingBuilder {
    floors: Vec<FloorGrid>,
    floor_size: usize,
    stairs: StairTable,
}

impl BuildingBuilder {
    /// Start a building from its floor layout.
    ///
    /// Returns `Err(GridError::InvalidLayout)` if `floors` is empty, if a
    /// floor has no rows, or if the floors are not all squares of one size.
    pub fn new(floors: Vec<FloorGrid>) -> Result<Self, GridError> {
        let floor_size = grid2d::validate_layout(&floors)?;
        Ok(Self {
            floors,
            floor_size,
            stairs: StairTable::new(),
        })
    }

    /// Number of floors.
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Side length of every floor.
    pub fn floor_size(&self) -> usize {
        self.floor_size
    }

    /// Link two positions on different floors with a bidirectional stair.
    ///
    /// Errors, checked in this order:
    /// - `InvalidFloor` if either floor index is outside `[0, num_floors)`
    /// - `OutOfBounds` if either row/column is outside the floor
    /// - `InvalidStairLink` if both endpoints share a floor
    /// - `DuplicateStairLink` if the pair is already linked
    ///
    /// On success both endpoint cells become [`Cell::Stair`], whatever they
    /// held before. A room overwritten this way can no longer be found by
    /// name.
    pub fn add_stair_link(&mut self, a: Position, b: Position) -> Result<&mut Self, GridError> {
        let num_floors = self.floors.len();
        for p in [&a, &b] {
            if p.floor >= num_floors {
                return Err(GridError::InvalidFloor {
                    floor: p.floor,
                    num_floors,
                });
            }
        }
        grid2d::check_bounds(&a, num_floors, self.floor_size)?;
        grid2d::check_bounds(&b, num_floors, self.floor_size)?;

        let link = self.stairs.insert(a, b)?;
        for p in [a, b] {
            let cell = &mut self.floors[p.floor][p.row][p.column];
            if let Cell::Room(name) = cell {
                tracing::debug!(room = %name, position = %p, "stair link replaces room cell");
            }
            *cell = Cell::Stair;
        }
        tracing::debug!(%link, "stair link added");
        Ok(self)
    }

    /// The cell at `position`.
    pub fn cell_at(&self, position: &Position) -> Result<&Cell, GridError> {
        cell_at(&self.floors, self.floor_size, position)
    }

    /// Freeze the building.
    pub fn build(self) -> Building {
        tracing::info!(
            floors = self.floors.len(),
            floor_size = self.floor_size,
            stair_links = self.stairs.len(),
            "building frozen"
        );
        Building {
            floors: self.floors,
            floor_size: self.floor_size,
            stairs: self.stairs,
        }
    }
}

fn cell_at<'a>(
    floors: &'a [FloorGrid],
    floor_size: usize,
    position: &Position,
) -> Result<&'a Cell, GridError> {
    grid2d::check_bounds(position, floors.len(), floor_size)?;
    Ok(&floors[position.floor][position.row][position.column])
}

/// An immutable multi-floor building.
///
/// Owns its floors and stair table. Every query borrows it read-only, so a
/// single instance can serve concurrent requests without locking.
#[derive(Clone, Debug)]
pub struct Building {
    floors: Vec<FloorGrid>,
    floor_size: usize,
    stairs: StairTable,
}

impl Building {
    /// The cell at `position`.
    ///
    /// Returns `Err(GridError::InvalidFloor)` or `Err(GridError::OutOfBounds)`
    /// if `position` is outside the building.
    pub fn cell_at(&self, position: &Position) -> Result<&Cell, GridError> {
        cell_at(&self.floors, self.floor_size, position)
    }

    /// The grid of floor `index`.
    pub fn floor(&self, index: usize) -> Option<&FloorGrid> {
        self.floors.get(index)
    }

    /// All floors, lowest first.
    pub fn floors(&self) -> &[FloorGrid] {
        &self.floors
    }

    /// The stair table.
    pub fn stairs(&self) -> &StairTable {
        &self.stairs
    }

    /// All stair links in insertion order.
    pub fn stair_links(&self) -> &[StairLink] {
        self.stairs.links()
    }

    /// Stair partners of `position`.
    pub fn linked(&self, position: &Position) -> &[Position] {
        self.stairs.linked(position)
    }

    /// Room lookup over this building.
    pub fn rooms(&self) -> RoomIndex<'_> {
        RoomIndex::new(self)
    }

    /// Display projection of this building.
    pub fn view(&self) -> MapView<'_> {
        MapView::new(self)
    }

    fn cell(&self, position: &Position) -> Option<&Cell> {
        self.floors
            .get(position.floor)?
            .get(position.row)?
            .get(position.column)
    }
}

impl Topology for Building {
    fn floor_count(&self) -> usize {
        self.floors.len()
    }

    fn floor_size(&self) -> usize {
        self.floor_size
    }

    fn is_passable(&self, position: &Position) -> bool {
        self.cell(position).is_some_and(Cell::is_passable)
    }

    fn neighbours(&self, position: &Position) -> Neighbours {
        let mut out = Neighbours::new();
        if !self.contains(position) {
            return out;
        }
        for (row, column) in grid2d::axis_neighbours(position.row, position.column, self.floor_size)
        {
            let next = Position::new(position.floor, row, column);
            if self.is_passable(&next) {
                out.push(next);
            }
        }
        out.extend(self.stairs.linked(position).iter().copied());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(floor: usize, row: usize, column: usize) -> Position {
        Position::new(floor, row, column)
    }

    /// Two 4x4 floors: a corridor ring around a walled core, one room per floor.
    fn two_floor_builder() -> BuildingBuilder {
        let ground = parse_floor([
            ["Lobby", ".", ".", "."],
            [".", "X", "X", "."],
            [".", "X", "X", "."],
            [".", ".", ".", "."],
        ]);
        let upper = parse_floor([
            [".", ".", ".", "."],
            [".", "X", "X", "."],
            [".", "X", "X", "."],
            [".", ".", ".", "Office"],
        ]);
        BuildingBuilder::new(vec![ground, upper]).unwrap()
    }

    // ── Construction ───────────────────────────────────────────

    #[test]
    fn new_rejects_empty_stack() {
        assert!(matches!(
            BuildingBuilder::new(Vec::new()),
            Err(GridError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn new_rejects_mismatched_floors() {
        let small = parse_floor([["."]]);
        let big = parse_floor([[".", "."], [".", "."]]);
        assert!(matches!(
            BuildingBuilder::new(vec![small, big]),
            Err(GridError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn new_rejects_non_square_floor() {
        let wide = parse_floor([[".", ".", "."], [".", ".", "."]]);
        assert!(BuildingBuilder::new(vec![wide]).is_err());
    }

    #[test]
    fn new_rejects_room_named_like_a_stair() {
        let mut floor = parse_floor([[".", "."], [".", "."]]);
        floor[0][1] = Cell::room("S");
        assert!(matches!(
            BuildingBuilder::new(vec![floor]),
            Err(GridError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn single_cell_building() {
        let b = BuildingBuilder::new(vec![parse_floor([["Kiosk"]])])
            .unwrap()
            .build();
        assert_eq!(b.cell_count(), 1);
        assert!(b.neighbours(&p(0, 0, 0)).is_empty());
    }

    // ── Stair links ────────────────────────────────────────────

    #[test]
    fn stair_link_rewrites_both_endpoints() {
        let mut builder = two_floor_builder();
        builder.add_stair_link(p(0, 0, 0), p(1, 0, 0)).unwrap();
        assert_eq!(builder.cell_at(&p(0, 0, 0)).unwrap(), &Cell::Stair);
        assert_eq!(builder.cell_at(&p(1, 0, 0)).unwrap(), &Cell::Stair);

        let building = builder.build();
        assert_eq!(building.linked(&p(0, 0, 0)), &[p(1, 0, 0)]);
        assert_eq!(building.linked(&p(1, 0, 0)), &[p(0, 0, 0)]);
        assert!(building.rooms().find_room("Lobby").is_none());
    }

    #[test]
    fn stair_link_rejects_bad_floor() {
        let mut builder = two_floor_builder();
        assert_eq!(
            builder.add_stair_link(p(0, 0, 3), p(2, 0, 3)).err(),
            Some(GridError::InvalidFloor {
                floor: 2,
                num_floors: 2
            })
        );
        assert!(builder.clone().build().stair_links().is_empty());
    }

    #[test]
    fn stair_link_rejects_out_of_bounds_cell() {
        let mut builder = two_floor_builder();
        assert!(matches!(
            builder.add_stair_link(p(0, 4, 0), p(1, 0, 0)),
            Err(GridError::OutOfBounds { floor_size: 4, .. })
        ));
        // Nothing was rewritten.
        assert_eq!(builder.cell_at(&p(1, 0, 0)).unwrap(), &Cell::Corridor);
    }

    #[test]
    fn stair_link_rejects_duplicates_and_same_floor() {
        let mut builder = two_floor_builder();
        builder.add_stair_link(p(0, 3, 3), p(1, 3, 0)).unwrap();
        assert!(matches!(
            builder.add_stair_link(p(1, 3, 0), p(0, 3, 3)),
            Err(GridError::DuplicateStairLink { .. })
        ));
        assert!(matches!(
            builder.add_stair_link(p(0, 0, 1), p(0, 0, 2)),
            Err(GridError::InvalidStairLink { .. })
        ));
    }

    #[test]
    fn stair_links_chain() {
        let mut builder = two_floor_builder();
        builder
            .add_stair_link(p(0, 0, 3), p(1, 0, 3))
            .unwrap()
            .add_stair_link(p(0, 3, 0), p(1, 3, 0))
            .unwrap();
        assert_eq!(builder.build().stair_links().len(), 2);
    }

    // ── Cell access ────────────────────────────────────────────

    #[test]
    fn cell_at_bounds() {
        let building = two_floor_builder().build();
        assert_eq!(building.cell_at(&p(0, 1, 1)).unwrap(), &Cell::Wall);
        assert_eq!(
            building.cell_at(&p(1, 3, 3)).unwrap(),
            &Cell::room("Office")
        );
        assert!(matches!(
            building.cell_at(&p(0, 0, 4)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            building.cell_at(&p(5, 0, 0)),
            Err(GridError::InvalidFloor { .. })
        ));
    }

    #[test]
    fn floor_by_index() {
        let building = two_floor_builder().build();
        let upper = building.floor(1).unwrap();
        assert_eq!(upper[3][3], Cell::room("Office"));
        assert_eq!(upper.len(), building.floor_size());
        assert!(building.floor(2).is_none());
    }

    // ── Neighbours ─────────────────────────────────────────────

    #[test]
    fn neighbours_skip_walls_and_follow_stairs() {
        let mut builder = two_floor_builder();
        builder.add_stair_link(p(0, 0, 1), p(1, 0, 1)).unwrap();
        let building = builder.build();

        // Down is a wall; up is off-grid.
        let n = building.neighbours(&p(0, 0, 1));
        assert_eq!(n.as_slice(), &[p(0, 0, 0), p(0, 0, 2), p(1, 0, 1)]);
    }

    #[test]
    fn neighbours_of_out_of_bounds_position_is_empty() {
        let building = two_floor_builder().build();
        assert!(building.neighbours(&p(0, 9, 9)).is_empty());
        assert!(!building.is_passable(&p(3, 0, 0)));
    }

    // ── Compliance ─────────────────────────────────────────────

    #[test]
    fn compliance_without_stairs() {
        compliance::run_full_compliance(&two_floor_builder().build());
    }

    #[test]
    fn compliance_with_stairs() {
        let mut builder = two_floor_builder();
        builder.add_stair_link(p(0, 0, 3), p(1, 0, 3)).unwrap();
        builder.add_stair_link(p(0, 3, 0), p(1, 2, 0)).unwrap();
        compliance::run_full_compliance(&builder.build());
    }

    // ── Property tests ─────────────────────────────────────────

    fn open_floors(n: usize, size: usize) -> Vec<FloorGrid> {
        vec![vec![vec![Cell::Corridor; size]; size]; n]
    }

    proptest! {
        #[test]
        fn stair_table_stays_symmetric(
            links in prop::collection::vec(
                ((0usize..3, 0usize..5, 0usize..5), (0usize..3, 0usize..5, 0usize..5)),
                0..12,
            ),
        ) {
            let mut builder = BuildingBuilder::new(open_floors(3, 5)).unwrap();
            for (a, b) in links {
                // Rejected links must leave the table untouched.
                let _ = builder.add_stair_link(a.into(), b.into());
            }
            let building = builder.build();
            prop_assert!(building.stairs().is_symmetric());
            for link in building.stair_links() {
                prop_assert!(building.linked(&link.a).contains(&link.b));
                prop_assert!(building.linked(&link.b).contains(&link.a));
                prop_assert_eq!(building.cell_at(&link.a).unwrap(), &Cell::Stair);
                prop_assert_eq!(building.cell_at(&link.b).unwrap(), &Cell::Stair);
            }
        }
    }
}
