use ratatui::style::Color;

use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Cells per board side.
pub const GRID_SIZE: u16 = 20;

/// The square board every session is played on.
pub const BOARD: GridSize = GridSize {
    width: GRID_SIZE,
    height: GRID_SIZE,
};

/// Tick interval at the start of a session, in milliseconds.
pub const INITIAL_SPEED_MS: u64 = 150;

/// Floor for the tick interval, in milliseconds.
pub const MIN_SPEED_MS: u64 = 50;

/// Tick interval reduction per food eaten, in milliseconds.
pub const SPEED_STEP_MS: u64 = 2;

/// Score granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Snake layout on a fresh game, head first.
pub const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 10, y: 10 },
    Position { x: 9, y: 10 },
    Position { x: 8, y: 10 },
];

/// Terminal columns used to draw one board cell, so cells look square.
pub const CELL_WIDTH: u16 = 2;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Gray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "●";
