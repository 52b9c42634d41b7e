use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::TOTAL_CELLS;
use crate::food::spawn_food;
use crate::grid::Cell;
use crate::input::Direction;
use crate::snake::Snake;

/// Session outcome. Terminal once lost or won; only a reset returns it to running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Running,
    Lost,
    Won,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Why the last game was lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepEvent {
    /// The game was already over; nothing changed.
    Idle,
    Moved,
    Ate,
    Lost(DeathReason),
    Won,
}

/// Read-only view handed to rendering and score collaborators.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Segments ordered head first.
    pub segments: Vec<Cell>,
    pub direction: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    pub outcome: Outcome,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub outcome: Outcome,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a state whose food placement is seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::initial();
        let food = spawn_food(&mut rng, &snake);

        Self {
            snake,
            food,
            score: 0,
            outcome: Outcome::Running,
            death_reason: None,
            tick_count: 0,
            rng,
        }
    }

    /// Discards snake, food, score and outcome and starts a fresh game.
    ///
    /// The random source carries over so seeded sessions stay reproducible
    /// across restarts.
    pub fn reset(&mut self) {
        let snake = Snake::initial();
        let food = spawn_food(&mut self.rng, &snake);

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.outcome = Outcome::Running;
        self.death_reason = None;
        self.tick_count = 0;
    }

    /// Accepts a direction intent for the next step.
    ///
    /// Ignored once the game is over, and rejected when it reverses the
    /// direction applied on the last step. Returns whether it was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        self.snake.request_direction(direction)
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> StepEvent {
        if self.outcome.is_terminal() {
            return StepEvent::Idle;
        }

        self.tick_count += 1;

        let candidate = self.snake.next_head();
        let is_eating = self.food == Some(candidate);

        // Collision wins over eating when both apply to the same cell.
        if let Some(reason) = self.did_collide(candidate, is_eating) {
            self.outcome = Outcome::Lost;
            self.death_reason = Some(reason);
            return StepEvent::Lost(reason);
        }

        self.snake.advance(candidate, is_eating);

        if !is_eating {
            return StepEvent::Moved;
        }

        self.score += 1;
        self.food = spawn_food(&mut self.rng, &self.snake);
        if let Some(food) = self.food {
            debug_assert!(!self.snake.occupies(food), "food placed on the snake");
            return StepEvent::Ate;
        }

        assert_eq!(
            self.snake.len(),
            TOTAL_CELLS,
            "food spawner returned nothing while free cells remain",
        );
        self.outcome = Outcome::Won;
        StepEvent::Won
    }

    /// Classifies a move of the head onto `candidate`.
    ///
    /// The tail is ignored when the snake does not grow this tick, because
    /// it vacates its cell as the head arrives.
    #[must_use]
    pub fn did_collide(&self, candidate: Cell, will_grow: bool) -> Option<DeathReason> {
        if !candidate.in_bounds() {
            return Some(DeathReason::WallCollision);
        }

        let hits_body = if will_grow {
            self.snake.occupies(candidate)
        } else {
            self.snake.occupies_ignoring_tail(candidate)
        };

        hits_body.then_some(DeathReason::SelfCollision)
    }

    /// Captures an owned view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().copied().collect(),
            direction: self.snake.direction(),
            food: self.food,
            score: self.score,
            outcome: self.outcome,
            death_reason: self.death_reason,
        }
    }
}
