use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::Snapshot;

const KEY_HELP: &str = "[Arrows/WASD] move  [Space] restart  [Q] quit";
const SEPARATOR: &str = "  ";

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    /// Best score reached since the program started.
    pub best_score: u32,
    pub theme: &'a Theme,
}

/// Renders the single HUD row under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, info: &HudInfo<'_>) {
    let line = hud_line(
        snapshot.score,
        snapshot.segments.len(),
        info.best_score.max(snapshot.score),
        usize::from(area.width),
        info.theme,
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// Builds the HUD line, dropping the key help when it does not fit `width`.
fn hud_line(
    score: u32,
    length: usize,
    best: u32,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let stats = format!("Score: {score}  Length: {length}  Best: {best}");
    let mut spans = vec![Span::styled(
        stats.clone(),
        Style::new().fg(theme.hud_score).add_modifier(Modifier::BOLD),
    )];

    let stats_width = stats.width();
    let help_width = KEY_HELP.width();
    if stats_width + SEPARATOR.len() + help_width <= width {
        let padding = width - stats_width - help_width;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(KEY_HELP, Style::new().fg(theme.hud_muted)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::config::THEME_CLASSIC;

    use super::{KEY_HELP, hud_line};

    fn plain(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn wide_hud_shows_stats_and_help() {
        let line = hud_line(3, 6, 9, 120, &THEME_CLASSIC);
        let text = plain(&line);

        assert!(text.starts_with("Score: 3  Length: 6  Best: 9"));
        assert!(text.ends_with(KEY_HELP));
        assert_eq!(text.chars().count(), 120);
    }

    #[test]
    fn narrow_hud_drops_help() {
        let line = hud_line(12, 15, 12, 42, &THEME_CLASSIC);

        assert_eq!(plain(&line), "Score: 12  Length: 15  Best: 12");
    }
}
