use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)` with y growing downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns true when `other` is the exact vector negation of `self`.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx == -ox && dy == -oy
    }
}

/// Key identity as delivered by the input source, before any mapping.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RawKey {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl RawKey {
    /// Parses a key name such as `"ArrowUp"`, `"w"` or `" "`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// High-level input events consumed by the run loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Key(RawKey),
    Quit,
}

/// Returns true for the dedicated restart key (space).
#[must_use]
pub fn is_restart_key(key: RawKey) -> bool {
    key == RawKey::Char(' ')
}

/// Maps a raw key to a direction intent.
///
/// Single characters are lowercased first so `W` and `w` both mean up;
/// arrow keys map as-is. Anything else yields `None`.
#[must_use]
pub fn map_key(key: RawKey) -> Option<Direction> {
    match key {
        RawKey::ArrowUp => Some(Direction::Up),
        RawKey::ArrowDown => Some(Direction::Down),
        RawKey::ArrowLeft => Some(Direction::Left),
        RawKey::ArrowRight => Some(Direction::Right),
        RawKey::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        RawKey::Escape | RawKey::Other => None,
    }
}

/// Translates a crossterm key event into a game input.
#[must_use]
pub fn translate_key_event(event: KeyEvent) -> Option<GameInput> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let is_ctrl_c =
        event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c');
    if is_ctrl_c {
        return Some(GameInput::Quit);
    }

    let key = match event.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Some(GameInput::Quit),
        KeyCode::Up => RawKey::ArrowUp,
        KeyCode::Down => RawKey::ArrowDown,
        KeyCode::Left => RawKey::ArrowLeft,
        KeyCode::Right => RawKey::ArrowRight,
        KeyCode::Char(c) => RawKey::Char(c),
        _ => RawKey::Other,
    };

    Some(GameInput::Key(key))
}

/// Waits up to `timeout` for one terminal event and translates it.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(translate_key_event(key)),
        _ => Ok(None),
    }
}
