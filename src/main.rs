use std::ops::ControlFlow;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use grid_snake::config::THEME_CLASSIC;
use grid_snake::error::Result;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, map_key};
use grid_snake::logging::init_file_logging;
use grid_snake::scheduler::TickScheduler;
use grid_snake::terminal_runtime::{TerminalSession, restore_terminal};
use tracing::{debug, info};

/// How long to block on input while no tick is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file; filter with RUST_LOG.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }
    install_panic_hook();

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    info!(seed = ?cli.seed, "starting");

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &mut state);
    drop(session);

    result
}

fn run(session: &mut TerminalSession, state: &mut GameState) -> Result<()> {
    let mut scheduler = TickScheduler::new();
    scheduler.start();
    let mut redraw = true;

    loop {
        if redraw {
            session.draw(&state.snapshot(), &THEME_CLASSIC)?;
            redraw = false;
        }

        let wait = scheduler
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        // Drain everything queued before the deadline so it lands ahead of the tick.
        if event::poll(wait)? {
            loop {
                match handle_event(event::read()?, state, &mut scheduler) {
                    ControlFlow::Break(()) => {
                        scheduler.stop();
                        info!(score = state.score, "quit");
                        return Ok(());
                    }
                    ControlFlow::Continue(changed) => redraw |= changed,
                }

                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if let Some(outcome) = scheduler.poll(state, Instant::now()) {
            debug!(?outcome, "tick");
            redraw |= outcome.changed_state();
        }
    }
}

/// Applies one terminal event. `Continue(true)` means the frame is stale.
fn handle_event(
    event: Event,
    state: &mut GameState,
    scheduler: &mut TickScheduler,
) -> ControlFlow<(), bool> {
    match event {
        Event::Key(key) => match map_key(key) {
            Some(GameInput::Quit) => ControlFlow::Break(()),
            Some(input) => {
                state.apply_input(input);
                scheduler.sync(state, Instant::now());
                ControlFlow::Continue(true)
            }
            None => ControlFlow::Continue(false),
        },
        Event::Resize(..) => ControlFlow::Continue(true),
        _ => ControlFlow::Continue(false),
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
