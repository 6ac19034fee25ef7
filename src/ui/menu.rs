use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    render_popup(
        frame,
        area,
        " start ",
        "SNAKE",
        &["", "[Enter]/[Space] Start", "[Q]/[Esc] Quit"],
        theme,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    render_popup(
        frame,
        area,
        " pause ",
        "PAUSED",
        &["", "[Enter]/[Space] Resume", "[Q]/[Esc] Quit"],
        theme,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let score_line = format!("Score: {score}");
    let cause = match death_reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    };

    render_popup(
        frame,
        area,
        " game over ",
        "GAME OVER",
        &[
            "",
            score_line.as_str(),
            cause,
            "",
            "[Enter]/[Space] Play Again",
            "[Q]/[Esc] Quit",
        ],
        theme,
    );
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    heading: &str,
    body: &[&str],
    theme: &Theme,
) {
    let popup = centered_popup(area, heading, body);
    frame.render_widget(Clear, popup);

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(Line::styled(
        heading.to_owned(),
        Style::new()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    ));
    lines.extend(body.iter().map(|line| Line::from((*line).to_owned())));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title.to_owned())),
        popup,
    );
}

/// Sizes the popup to its widest line plus border and padding, clamped to `area`.
fn centered_popup(area: Rect, heading: &str, body: &[&str]) -> Rect {
    let widest = body
        .iter()
        .map(|line| line.width())
        .chain(std::iter::once(heading.width()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest + 4).unwrap_or(u16::MAX).min(area.width);
    let height = u16::try_from(body.len() + 3).unwrap_or(u16::MAX).min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    center
}
