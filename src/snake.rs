use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE;
use crate::grid::Cell;
use crate::input::Direction;

/// Ordered snake body plus its heading pair.
///
/// `direction` is the heading applied on the last completed step and
/// `pending_direction` the one requested for the next step. Only the latest
/// pending value is kept; it is a buffer, not a queue.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates the fixed three-segment starting snake heading right.
    #[must_use]
    pub fn initial() -> Self {
        Self::from_segments(INITIAL_SNAKE.to_vec(), Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns where the head lands if the pending direction is applied.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.pending_direction)
    }

    /// Overwrites the pending direction unless it reverses the applied one.
    ///
    /// Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Commits the pending direction and pushes `head` onto the front.
    ///
    /// The tail is dropped unless `grow` is set.
    pub fn advance(&mut self, head: Cell, grow: bool) {
        self.direction = self.pending_direction;
        self.body.push_front(head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if any segment except the tail occupies `cell`.
    #[must_use]
    pub fn occupies_ignoring_tail(&self, cell: Cell) -> bool {
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).any(|segment| *segment == cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading applied on the last completed step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading that the next step will apply.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
