use crate::config::GRID_SIZE;
use crate::input::Direction;

/// Board cell in logical grid coordinates, `(0, 0)` at the top-left.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies on the board.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        in_bounds(self)
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// The result may lie off the board; callers check with [`in_bounds`].
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Returns true when `cell` lies inside the fixed `GRID_SIZE` board.
#[must_use]
pub fn in_bounds(cell: Cell) -> bool {
    (0..GRID_SIZE).contains(&cell.x) && (0..GRID_SIZE).contains(&cell.y)
}

/// Iterates every board cell in row-major order.
pub fn all_cells() -> impl Iterator<Item = Cell> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Cell { x, y }))
}

#[cfg(test)]
mod tests {
    use crate::config::{GRID_SIZE, TOTAL_CELLS};
    use crate::input::Direction;

    use super::{Cell, all_cells, in_bounds};

    #[test]
    fn bounds_cover_exactly_the_board() {
        assert!(in_bounds(Cell::new(0, 0)));
        assert!(in_bounds(Cell::new(GRID_SIZE - 1, GRID_SIZE - 1)));
        assert!(!in_bounds(Cell::new(-1, 0)));
        assert!(!in_bounds(Cell::new(0, -1)));
        assert!(!in_bounds(Cell::new(GRID_SIZE, 5)));
        assert!(!in_bounds(Cell::new(5, GRID_SIZE)));
    }

    #[test]
    fn step_moves_exactly_one_cell() {
        let origin = Cell::new(5, 5);

        assert_eq!(origin.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn all_cells_visits_each_cell_once_in_row_major_order() {
        let cells: Vec<Cell> = all_cells().collect();

        assert_eq!(cells.len(), TOTAL_CELLS);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[usize::try_from(GRID_SIZE).expect("fits")], Cell::new(0, 1));
        assert_eq!(cells[TOTAL_CELLS - 1], Cell::new(GRID_SIZE - 1, GRID_SIZE - 1));
        assert!(cells.iter().all(|cell| in_bounds(*cell)));

        let mut unique = cells.clone();
        unique.sort_by_key(|cell| (cell.y, cell.x));
        unique.dedup();
        assert_eq!(unique.len(), TOTAL_CELLS);
    }
}
