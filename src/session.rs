use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::TICK_INTERVAL;
use crate::game::{GameState, Snapshot, StepEvent};
use crate::input::{RawKey, is_restart_key, map_key};

/// Handle for one scheduled frame callback.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct FrameId(u64);

/// Recurring frame-callback source with cancellation.
///
/// A frame requested here is later delivered to [`Session::on_frame`] by
/// whoever drives the scheduler.
pub trait Scheduler {
    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, frame: FrameId);
}

/// Single-threaded scheduler backed by a queue of outstanding frames.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameId>,
}

impl FrameQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest outstanding frame.
    pub fn take_pending(&mut self) -> Option<FrameId> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }

    /// Number of frames requested and not yet delivered or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let frame = FrameId(self.next_id);
        self.pending.push(frame);
        frame
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        self.pending.retain(|pending| *pending != frame);
    }
}

/// Rendering and score-display collaborator.
pub trait Presenter {
    /// Receives the state after every visible change, terminal overlays included.
    fn present(&mut self, snapshot: &Snapshot);

    /// Receives the score whenever it changes (including the reset to zero).
    fn score_changed(&mut self, score: u32);
}

/// Owns one game and drives it at a fixed tick rate from frame callbacks.
///
/// Starts stopped; call [`Session::restart`] to begin. At most one frame is
/// outstanding at any time.
#[derive(Debug)]
pub struct Session<S, P> {
    state: GameState,
    scheduler: S,
    presenter: P,
    frame: Option<FrameId>,
    last_tick: Option<Instant>,
    tick_interval: Duration,
}

impl<S: Scheduler, P: Presenter> Session<S, P> {
    /// Wraps `state` in a stopped session ticking every [`TICK_INTERVAL`].
    #[must_use]
    pub fn new(state: GameState, scheduler: S, presenter: P) -> Self {
        Self {
            state,
            scheduler,
            presenter,
            frame: None,
            last_tick: None,
            tick_interval: TICK_INTERVAL,
        }
    }

    /// Starts ticking `state` as it stands, without resetting it.
    ///
    /// Used to begin a session from a prepared position, such as a fresh
    /// seeded game or a replayed scenario. A terminal `state` is presented
    /// but not scheduled.
    #[must_use]
    pub fn with_state(state: GameState, scheduler: S, presenter: P) -> Self {
        let mut session = Self::new(state, scheduler, presenter);
        session.begin();
        session
    }

    /// Starts a fresh game, cancelling any scheduled frame first.
    pub fn restart(&mut self) {
        self.stop();

        self.state.reset();
        info!(food = ?self.state.food, "game restarted");
        self.begin();
    }

    fn begin(&mut self) {
        debug_assert!(self.frame.is_none(), "begin with a frame outstanding");
        self.last_tick = None;

        self.presenter.score_changed(self.state.score);
        self.presenter.present(&self.state.snapshot());
        if !self.state.outcome.is_terminal() {
            self.frame = Some(self.scheduler.request_frame());
        }
    }

    /// Cancels frame scheduling. Calling it again is a no-op.
    pub fn stop(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.scheduler.cancel_frame(frame);
            debug!(?frame, "frame cancelled");
        }
    }

    /// Frame callback: steps the game once the tick interval has elapsed
    /// since the last committed tick, then schedules the next frame.
    ///
    /// Frames that are not the session's current one are ignored.
    pub fn on_frame(&mut self, frame: FrameId, now: Instant) {
        if self.frame != Some(frame) {
            return;
        }
        self.frame = None;

        let last_tick = *self.last_tick.get_or_insert(now);
        if now.saturating_duration_since(last_tick) >= self.tick_interval {
            self.last_tick = Some(now);
            self.tick();
        }

        if !self.state.outcome.is_terminal() {
            self.frame = Some(self.scheduler.request_frame());
        }
    }

    /// Routes one key press: restart first, then direction intents.
    pub fn handle_key(&mut self, key: RawKey) {
        if is_restart_key(key) {
            self.restart();
            return;
        }

        if self.state.outcome.is_terminal() {
            return;
        }

        let Some(direction) = map_key(key) else {
            return;
        };
        if !self.state.request_direction(direction) {
            debug!(?direction, "reversal rejected");
        }
    }

    fn tick(&mut self) {
        match self.state.step() {
            StepEvent::Idle => {}
            StepEvent::Moved => self.presenter.present(&self.state.snapshot()),
            StepEvent::Ate => {
                self.presenter.score_changed(self.state.score);
                self.presenter.present(&self.state.snapshot());
            }
            StepEvent::Lost(reason) => {
                info!(?reason, score = self.state.score, "game lost");
                self.finish();
            }
            StepEvent::Won => {
                info!(score = self.state.score, "board filled, game won");
                self.presenter.score_changed(self.state.score);
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.stop();
        self.presenter.present(&self.state.snapshot());
    }

    /// Returns true while a frame is scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
