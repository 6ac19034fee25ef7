use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Theme;
use crate::game::Snapshot;
use crate::renderer::draw_snapshot;

/// The game's own screen: raw keyboard input and an alternate buffer that
/// the board is drawn into. Leaving it, by drop or panic, gives the shell
/// back its normal screen.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    /// Takes over stdout for drawing the board.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        Terminal::new(CrosstermBackend::new(stdout))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| restore_terminal())
    }

    /// Redraws the board, HUD and any overlay for `snapshot`.
    pub fn draw(&mut self, snapshot: &Snapshot, theme: &Theme) -> io::Result<()> {
        draw_snapshot(&mut self.terminal, snapshot, theme)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Gives the shell its screen and cursor back. Errors are swallowed since
/// this also runs from the panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
