use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;

use crate::grid::Cell;

/// Number of cells along each side of the square board.
pub const GRID_SIZE: i32 = 20;

/// Total number of cells on the board.
pub const TOTAL_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Fixed simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 110;

/// Fixed simulation tick interval.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// How long the run loop waits for input before offering the next frame.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Segments of a freshly started snake, head first, trailing to the left.
pub const INITIAL_SNAKE: [Cell; 3] = [
    Cell { x: 8, y: 10 },
    Cell { x: 7, y: 10 },
    Cell { x: 6, y: 10 },
];

/// Terminal columns used to draw one board cell (keeps cells roughly square).
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_FOOD: &str = "◖◗";
pub const GLYPH_EMPTY: &str = " ·";

/// A colour theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub grid_dots: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub overlay_win: Color,
    pub overlay_loss: Color,
}

/// Yellow head, green body, red food.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Yellow,
    snake_body: Color::Green,
    food: Color::Red,
    grid_dots: Color::DarkGray,
    border_fg: Color::Gray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    overlay_win: Color::Green,
    overlay_loss: Color::Red,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    grid_dots: Color::DarkGray,
    border_fg: Color::Cyan,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
    overlay_win: Color::Cyan,
    overlay_loss: Color::LightRed,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    grid_dots: Color::Black,
    border_fg: Color::Magenta,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
    overlay_win: Color::LightGreen,
    overlay_loss: Color::LightMagenta,
};

/// Theme selectable from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Classic,
    Ocean,
    Neon,
}

impl ThemeName {
    /// Returns the theme definition for this name.
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Ocean => &THEME_OCEAN,
            Self::Neon => &THEME_NEON,
        }
    }
}
