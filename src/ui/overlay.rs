use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::{DeathReason, Outcome, Snapshot};

/// Draws the end-of-game popup over the board. A running game draws nothing.
pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let (title, color) = match snapshot.outcome {
        Outcome::Running => return,
        Outcome::Won => ("YOU WIN!", theme.overlay_win),
        Outcome::Lost => ("GAME OVER", theme.overlay_loss),
    };

    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(title, Style::new().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(cause_text(snapshot.death_reason)),
        Line::from(""),
        Line::from("Press Space to play again"),
        Line::styled("[Q]/[Esc] Quit", Style::new().fg(theme.hud_muted)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(color))),
        popup,
    );
}

fn cause_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::THEME_CLASSIC;
    use crate::game::{DeathReason, GameState, Outcome, Snapshot};

    use super::{cause_text, centered_popup, render_overlay};

    fn overlay_text(snapshot: &Snapshot) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(40, 20)).expect("test terminal should build");

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_overlay(frame, area, snapshot, &THEME_CLASSIC);
            })
            .expect("draw should succeed");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn running_game_draws_no_popup() {
        let snapshot = GameState::new_with_seed(1).snapshot();

        let text = overlay_text(&snapshot);

        assert!(text.trim().is_empty());
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn terminal_outcomes_pick_their_title() {
        let mut state = GameState::new_with_seed(2);
        state.outcome = Outcome::Lost;
        state.death_reason = Some(DeathReason::WallCollision);
        let lost = overlay_text(&state.snapshot());
        assert!(lost.contains("GAME OVER"));
        assert!(lost.contains("hit wall"));

        state.outcome = Outcome::Won;
        state.death_reason = None;
        let won = overlay_text(&state.snapshot());
        assert!(won.contains("YOU WIN!"));
        assert!(!won.contains("GAME OVER"));
    }

    #[test]
    fn cause_text_names_collision_kind() {
        assert_eq!(cause_text(Some(DeathReason::WallCollision)), "Cause: hit wall");
        assert_eq!(cause_text(Some(DeathReason::SelfCollision)), "Cause: hit yourself");
        assert_eq!(cause_text(None), "");
    }

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(4, 2, 42, 22);
        let popup = centered_popup(area, 80, 50);

        assert!(popup.width > 0 && popup.height > 0);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}
