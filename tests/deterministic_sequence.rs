use std::time::Instant;

use grid_snake::config::{GRID_SIZE, INITIAL_SNAKE, TICK_INTERVAL, TOTAL_CELLS};
use grid_snake::game::{GameState, Outcome, Snapshot, StepEvent};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, RawKey};
use grid_snake::session::{FrameQueue, Presenter, Session};
use grid_snake::snake::Snake;

#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<Snapshot>,
    scores: Vec<u32>,
}

impl Presenter for Recorder {
    fn present(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.clone());
    }

    fn score_changed(&mut self, score: u32) {
        self.scores.push(score);
    }
}

/// Boustrophedon walk covering every cell, starting at the top-left corner.
fn serpentine() -> Vec<Cell> {
    (0..GRID_SIZE)
        .flat_map(|y| {
            let row: Vec<Cell> = if y % 2 == 0 {
                (0..GRID_SIZE).map(|x| Cell::new(x, y)).collect()
            } else {
                (0..GRID_SIZE).rev().map(|x| Cell::new(x, y)).collect()
            };
            row
        })
        .collect()
}

fn almost_won_state(seed: u64) -> GameState {
    let path = serpentine();
    let mut state = GameState::new_with_seed(seed);
    state.snake = Snake::from_segments(path[1..].to_vec(), Direction::Left);
    state.food = Some(path[0]);
    state.score = u32::try_from(path.len() - 1 - INITIAL_SNAKE.len()).expect("fits");
    state
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(42);
    state.food = Some(Cell::new(9, 10));

    assert_eq!(state.step(), StepEvent::Ate);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Cell::new(9, 10));

    state.food = Some(Cell::new(0, 19));
    assert!(state.request_direction(Direction::Up));
    for expected_y in (0..10).rev() {
        assert_eq!(state.step(), StepEvent::Moved);
        assert_eq!(state.snake.head(), Cell::new(9, expected_y));
        assert_eq!(state.snake.len(), 4);
    }

    assert_eq!(state.outcome, Outcome::Running);
    state.step();
    assert_eq!(state.outcome, Outcome::Lost);
}

#[test]
fn filling_the_board_wins() {
    let mut state = almost_won_state(5);

    assert_eq!(state.step(), StepEvent::Won);

    assert_eq!(state.outcome, Outcome::Won);
    assert_eq!(state.snake.len(), TOTAL_CELLS);
    assert_eq!(state.food, None);
    assert_eq!(state.death_reason, None);
    assert_eq!(state.step(), StepEvent::Idle);
}

#[test]
fn score_tracks_food_eaten() {
    let mut state = GameState::new_with_seed(9);

    for eaten in 1..=4_u32 {
        state.food = Some(state.snake.next_head());
        assert_eq!(state.step(), StepEvent::Ate);
        assert_eq!(state.score, eaten);
        assert_eq!(state.snake.len(), INITIAL_SNAKE.len() + eaten as usize);
    }
}

#[test]
fn seeded_games_replay_identically() {
    let mut first = GameState::new_with_seed(77);
    let mut second = GameState::new_with_seed(77);

    for _ in 0..5 {
        first.food = Some(first.snake.next_head());
        second.food = Some(second.snake.next_head());
        first.step();
        second.step();
        assert_eq!(first.snapshot(), second.snapshot());
    }
}

#[test]
fn session_restart_after_win_resets_everything() {
    let mut session =
        Session::with_state(almost_won_state(3), FrameQueue::new(), Recorder::default());
    let start = Instant::now();

    let frame = session.scheduler_mut().take_pending().expect("scheduled");
    session.on_frame(frame, start);
    let frame = session.scheduler_mut().take_pending().expect("scheduled");
    session.on_frame(frame, start + TICK_INTERVAL);

    assert_eq!(session.state().outcome, Outcome::Won);
    assert!(!session.is_scheduled());
    assert_eq!(
        session.presenter().frames.last().map(|frame| frame.outcome),
        Some(Outcome::Won)
    );

    session.handle_key(RawKey::ArrowDown);
    assert_eq!(session.state().snake.len(), TOTAL_CELLS);

    session.handle_key(RawKey::Char(' '));

    let state = session.state();
    assert_eq!(state.outcome, Outcome::Running);
    assert_eq!(state.score, 0);
    let segments: Vec<Cell> = state.snake.segments().copied().collect();
    assert_eq!(segments, INITIAL_SNAKE.to_vec());
    let food = state.food.expect("fresh board has food");
    assert!(!state.snake.occupies(food));
    assert_eq!(session.presenter().scores.last(), Some(&0));
    assert_eq!(session.scheduler_mut().pending_count(), 1);
}

#[test]
fn session_restart_after_loss_resets_everything() {
    let mut state = GameState::new_with_seed(8);
    state.food = Some(Cell::new(9, 10));
    let mut session = Session::with_state(state, FrameQueue::new(), Recorder::default());
    let start = Instant::now();

    let mut now = start;
    while session.state().outcome == Outcome::Running {
        let frame = session
            .scheduler_mut()
            .take_pending()
            .expect("scheduled while running");
        session.on_frame(frame, now);
        now += TICK_INTERVAL;
    }

    assert_eq!(session.state().outcome, Outcome::Lost);
    assert!(session.state().score >= 1);
    assert!(session.presenter().scores.contains(&1));

    session.handle_key(RawKey::Char(' '));

    assert_eq!(session.state().outcome, Outcome::Running);
    assert_eq!(session.state().score, 0);
    assert_eq!(session.state().snake.len(), INITIAL_SNAKE.len());
}

#[test]
fn stop_twice_leaves_state_unchanged() {
    let mut session = Session::new(
        GameState::new_with_seed(4),
        FrameQueue::new(),
        Recorder::default(),
    );
    session.restart();
    let before = session.state().snapshot();

    session.stop();
    session.stop();

    assert_eq!(session.state().snapshot(), before);
    assert!(!session.is_scheduled());
}
