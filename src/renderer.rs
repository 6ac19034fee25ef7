use std::io;

use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{BOARD, CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, Theme};
use crate::game::{GameStatus, Snapshot};
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

const BOARD_WIDTH: u16 = BOARD.width * CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = BOARD.height + 2;

/// Draws one frame of `snapshot` onto any ratatui terminal.
pub fn draw_snapshot<B: Backend>(
    terminal: &mut Terminal<B>,
    snapshot: &Snapshot,
    theme: &Theme,
) -> io::Result<()> {
    terminal.draw(|frame| render(frame, snapshot, theme))?;
    Ok(())
}

/// Renders the full game frame from a state snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let area = frame.area();
    if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT + HUD_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [play_area, hud_area] = Layout::vertical([
        Constraint::Length(BOARD_HEIGHT),
        Constraint::Length(HUD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot.food, theme);
    render_snake(frame, inner, &snapshot.snake, theme);
    render_hud(frame, hud_area, snapshot, theme);

    match snapshot.status {
        GameStatus::NotStarted => render_start_menu(frame, play_area, theme),
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, play_area, snapshot.score, snapshot.death_reason, theme);
        }
        GameStatus::Playing => {}
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {BOARD_WIDTH}x{}", BOARD_HEIGHT + HUD_HEIGHT)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Position, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snake: &[Position], theme: &Theme) {
    let buffer = frame.buffer_mut();

    for (index, segment) in snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(BOARD) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
