use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{
    BOARD, INITIAL_SNAKE, INITIAL_SPEED_MS, MIN_SPEED_MS, POINTS_PER_FOOD, SPEED_STEP_MS,
};
use crate::food::spawn_position;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// No session has been started yet.
    NotStarted,
    Playing,
    Paused,
    /// Terminal until the next `init_game`.
    GameOver,
}

impl GameStatus {
    /// True for `Playing` and `Paused`: a session exists and has not ended.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single `tick` did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not playing; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(DeathReason),
}

impl TickOutcome {
    /// True when the tick changed anything a frame would show.
    #[must_use]
    pub fn changed_state(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Complete mutable game state, owned by whoever drives the loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    /// Tick interval in milliseconds.
    pub speed_ms: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameState {
    /// Creates a state machine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::from_segments(INITIAL_SNAKE);
        let food = spawn_position(&mut rng, BOARD, &snake);

        Self {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            status: GameStatus::NotStarted,
            death_reason: None,
            rng,
        }
    }

    /// Starts a fresh session, discarding everything but the random source.
    pub fn init_game(&mut self) {
        self.snake = Snake::from_segments(INITIAL_SNAKE);
        self.food = spawn_position(&mut self.rng, BOARD, &self.snake);
        self.direction = Direction::Right;
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.status = GameStatus::Playing;
        self.death_reason = None;

        info!(food = ?self.food, "game started");
    }

    /// Changes heading unless `requested` reverses the most recently set direction.
    pub fn set_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.direction = requested;
        }
    }

    /// Flips between `Playing` and `Paused`; other states are left alone.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            other => other,
        };

        debug!(status = ?self.status, "pause toggled");
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Collisions are tested against the whole pre-move body, tail included,
    /// and leave the snake where it was.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Idle;
        }

        let new_head = self.snake.head().shifted(self.direction);

        if !new_head.is_within_bounds(BOARD) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.occupies(new_head) {
            return self.end(DeathReason::SelfCollision);
        }

        self.snake.push_head(new_head);

        if new_head != self.food {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += POINTS_PER_FOOD;
        self.speed_ms = self
            .speed_ms
            .saturating_sub(SPEED_STEP_MS)
            .max(MIN_SPEED_MS);
        self.food = spawn_position(&mut self.rng, BOARD, &self.snake);

        debug!(
            score = self.score,
            speed_ms = self.speed_ms,
            length = self.snake.len(),
            "food eaten"
        );
        TickOutcome::Ate
    }

    /// Applies one external input event.
    ///
    /// Outside a running session only `Confirm` does anything (it starts one).
    /// Inside a session `Confirm` toggles pause and directions are steered,
    /// also while paused.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Confirm if self.status.is_running() => self.toggle_pause(),
            GameInput::Confirm => self.init_game(),
            GameInput::Direction(direction) => {
                if self.status.is_running() {
                    self.set_direction(direction);
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Returns a read-only copy of everything the presentation layer draws.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            speed_ms: self.speed_ms,
            status: self.status,
            death_reason: self.death_reason,
        }
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);

        info!(?reason, score = self.score, length = self.snake.len(), "game over");
        TickOutcome::Collided(reason)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable view of a `GameState` at one instant.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub speed_ms: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

impl Snapshot {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status.is_running()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
