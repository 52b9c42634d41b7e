use rand::Rng;
use tracing::debug;

use crate::config::{GRID_SIZE, TOTAL_CELLS};
use crate::grid::{self, Cell};
use crate::snake::Snake;

/// Random draws attempted before falling back to scanning free cells.
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Picks an unoccupied cell uniformly at random.
///
/// Returns `None` when the snake covers the whole board. Draws random cells
/// and rejects occupied ones; after [`MAX_REJECTION_ATTEMPTS`] misses it picks
/// uniformly among the remaining free cells instead, so a nearly full board
/// costs one scan rather than an unbounded loop.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Option<Cell> {
    if snake.len() >= TOTAL_CELLS {
        return None;
    }

    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = Cell {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    debug!(
        snake_len = snake.len(),
        "rejection sampling exhausted, scanning free cells"
    );
    let cell = spawn_from_free_cells(rng, snake);
    assert!(
        cell.is_some(),
        "spawn_food: no free cell although snake covers {} of {TOTAL_CELLS} cells",
        snake.len(),
    );
    cell
}

fn spawn_from_free_cells<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Option<Cell> {
    let free: Vec<Cell> = grid::all_cells()
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    if free.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..free.len());
    Some(free[index])
}
