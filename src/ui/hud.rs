use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::Snapshot;

/// Rows reserved below the board.
pub const HUD_HEIGHT: u16 = 2;

/// Renders the score row and the key hint row.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let [stats_row, hint_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(stats_line(snapshot, theme)).alignment(Alignment::Center),
        stats_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("arrows/WASD move  space/enter pause  q quit"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.menu_footer)),
        hint_row,
    );
}

fn stats_line(snapshot: &Snapshot, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new()
        .fg(theme.hud_value)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(format!("{}ms", snapshot.speed_ms), value),
        Span::styled("  Length ", label),
        Span::styled(snapshot.snake.len().to_string(), value),
    ])
}
