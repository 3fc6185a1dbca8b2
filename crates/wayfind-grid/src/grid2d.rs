//! Shared helpers for square floor grids.

use smallvec::SmallVec;
use wayfind_core::{is_structural_symbol, FloorGrid, GridError, Position};

/// In-floor step offsets in expansion order: down, up, left, right.
///
/// Route search visits neighbours in this order, so it decides which of
/// two equal-cost predecessors is recorded first.
pub const AXIS_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Check that `position` addresses a cell of a `num_floors`-floor building
/// whose floors are `floor_size` cells wide.
pub fn check_bounds(
    position: &Position,
    num_floors: usize,
    floor_size: usize,
) -> Result<(), GridError> {
    if position.floor >= num_floors {
        return Err(GridError::InvalidFloor {
            floor: position.floor,
            num_floors,
        });
    }
    if position.row >= floor_size || position.column >= floor_size {
        return Err(GridError::OutOfBounds {
            position: *position,
            floor_size,
        });
    }
    Ok(())
}

/// Floor-major canonical ordering: `(0,0,0), (0,0,1), ..., (n-1, s-1, s-1)`.
pub fn canonical_ordering(num_floors: usize, floor_size: usize) -> Vec<Position> {
    let mut out = Vec::with_capacity(num_floors * floor_size * floor_size);
    for floor in 0..num_floors {
        for row in 0..floor_size {
            for column in 0..floor_size {
                out.push(Position::new(floor, row, column));
            }
        }
    }
    out
}

/// Position of a cell in [`canonical_ordering`], or `None` if out of bounds.
pub fn canonical_rank(position: &Position, num_floors: usize, floor_size: usize) -> Option<usize> {
    check_bounds(position, num_floors, floor_size).ok()?;
    Some((position.floor * floor_size + position.row) * floor_size + position.column)
}

/// The in-bounds axis neighbours of `(row, column)`, in [`AXIS_OFFSETS`] order.
///
/// Floors have hard edges: stepping off the grid yields no neighbour.
pub fn axis_neighbours(row: usize, column: usize, floor_size: usize) -> SmallVec<[(usize, usize); 4]> {
    let mut out = SmallVec::new();
    for (dr, dc) in AXIS_OFFSETS {
        let Some(r) = row.checked_add_signed(dr) else {
            continue;
        };
        let Some(c) = column.checked_add_signed(dc) else {
            continue;
        };
        if r < floor_size && c < floor_size {
            out.push((r, c));
        }
    }
    out
}

/// Validate a floor stack and return the shared floor size.
///
/// Rejects an empty stack, empty floors, non-square floors and floors of
/// differing sizes.
pub fn validate_layout(floors: &[FloorGrid]) -> Result<usize, GridError> {
    let first = floors.first().ok_or_else(|| GridError::InvalidLayout {
        reason: "building requires at least one floor".to_string(),
    })?;
    let floor_size = first.len();
    if floor_size == 0 {
        return Err(GridError::InvalidLayout {
            reason: "floor 0 has no rows".to_string(),
        });
    }
    for (index, floor) in floors.iter().enumerate() {
        if floor.len() != floor_size {
            return Err(GridError::InvalidLayout {
                reason: format!(
                    "floor {index} has {} rows, expected {floor_size}",
                    floor.len()
                ),
            });
        }
        if let Some((row, cells)) = floor
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != floor_size)
        {
            return Err(GridError::InvalidLayout {
                reason: format!(
                    "floor {index} row {row} has {} columns, expected {floor_size}",
                    cells.len()
                ),
            });
        }
        for (row, cells) in floor.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if let Some(name) = cell.room_name().filter(|n| is_structural_symbol(n)) {
                    return Err(GridError::InvalidLayout {
                        reason: format!(
                            "room at floor {index} row {row} column {column} is named {name:?}, a reserved symbol"
                        ),
                    });
                }
            }
        }
    }
    Ok(floor_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Cell;

    fn square(size: usize) -> FloorGrid {
        vec![vec![Cell::Corridor; size]; size]
    }

    #[test]
    fn axis_neighbours_interior_in_expansion_order() {
        let n = axis_neighbours(2, 2, 5);
        assert_eq!(n.as_slice(), &[(3, 2), (1, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn axis_neighbours_corner_stops_at_edges() {
        assert_eq!(axis_neighbours(0, 0, 5).as_slice(), &[(1, 0), (0, 1)]);
        assert_eq!(axis_neighbours(4, 4, 5).as_slice(), &[(3, 4), (4, 3)]);
    }

    #[test]
    fn axis_neighbours_single_cell() {
        assert!(axis_neighbours(0, 0, 1).is_empty());
    }

    #[test]
    fn check_bounds_reports_floor_before_cell() {
        assert_eq!(
            check_bounds(&Position::new(3, 20, 20), 3, 11),
            Err(GridError::InvalidFloor {
                floor: 3,
                num_floors: 3
            })
        );
        assert!(matches!(
            check_bounds(&Position::new(2, 0, 11), 3, 11),
            Err(GridError::OutOfBounds { floor_size: 11, .. })
        ));
        assert!(check_bounds(&Position::new(2, 10, 10), 3, 11).is_ok());
    }

    #[test]
    fn canonical_rank_matches_ordering() {
        let ordering = canonical_ordering(2, 3);
        assert_eq!(ordering.len(), 18);
        for (i, p) in ordering.iter().enumerate() {
            assert_eq!(canonical_rank(p, 2, 3), Some(i));
        }
        assert_eq!(canonical_rank(&Position::new(2, 0, 0), 2, 3), None);
    }

    #[test]
    fn validate_layout_accepts_uniform_squares() {
        assert_eq!(validate_layout(&[square(4), square(4)]), Ok(4));
    }

    #[test]
    fn validate_layout_rejects_malformed_stacks() {
        assert!(validate_layout(&[]).is_err());
        assert!(validate_layout(&[Vec::new()]).is_err());
        assert!(validate_layout(&[square(4), square(5)]).is_err());

        let mut ragged = square(3);
        ragged[1].pop();
        assert!(matches!(
            validate_layout(&[ragged]),
            Err(GridError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn validate_layout_rejects_rooms_named_like_symbols() {
        for symbol in ["X", ".", "S"] {
            let mut floor = square(2);
            floor[1][0] = Cell::room(symbol);
            assert!(matches!(
                validate_layout(&[floor]),
                Err(GridError::InvalidLayout { .. })
            ));
        }
        let mut floor = square(2);
        floor[1][0] = Cell::room("S1");
        assert_eq!(validate_layout(&[floor]), Ok(2));
    }
}
