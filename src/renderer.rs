use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GRID_SIZE, Theme,
};
use crate::game::Snapshot;
use crate::grid::{self, Cell};
use crate::input::Direction;
use crate::session::Presenter;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::overlay::render_overlay;

const BOARD_WIDTH: u16 = GRID_SIZE as u16 * CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = GRID_SIZE as u16 + 2;
const HUD_HEIGHT: u16 = 1;

/// Presenter that keeps the latest snapshot for the run loop to draw.
#[derive(Debug, Default)]
pub struct FramePresenter {
    latest: Option<Snapshot>,
    best_score: u32,
}

impl FramePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently presented snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// Highest score seen during this process.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

impl Presenter for FramePresenter {
    fn present(&mut self, snapshot: &Snapshot) {
        self.latest = Some(snapshot.clone());
    }

    fn score_changed(&mut self, score: u32) {
        self.best_score = self.best_score.max(score);
    }
}

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, hud_info: &HudInfo<'_>) {
    let area = centered_board(frame.area());
    let [board_area, hud_area] = Layout::vertical([
        Constraint::Length(BOARD_HEIGHT),
        Constraint::Length(HUD_HEIGHT),
    ])
    .areas(area);

    let theme = hud_info.theme;
    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, theme);
    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);
    render_hud(frame, hud_area, snapshot, hud_info);

    if snapshot.outcome.is_terminal() {
        render_overlay(frame, board_area, snapshot, theme);
    }
}

fn centered_board(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = (BOARD_HEIGHT + HUD_HEIGHT).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, theme: &Theme) {
    let style = Style::new().fg(theme.grid_dots);
    let buffer = frame.buffer_mut();

    for cell in grid::all_cells() {
        if let Some((x, y)) = logical_to_terminal(inner, cell) {
            buffer.set_string(x, y, GLYPH_EMPTY, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Draw tail to head so the head stays visible if segments ever overlap.
    for (index, segment) in snapshot.segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(snapshot.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    if !cell.in_bounds() {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
