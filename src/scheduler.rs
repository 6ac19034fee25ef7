use std::time::{Duration, Instant};

use tracing::trace;

use crate::game::{GameState, TickOutcome};

/// Fires `GameState::tick` once per `speed_ms` while a session is running.
///
/// The scheduler never owns the state; every call reads through the one
/// `GameState` the caller passes in, so speed and status are always current.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    enabled: bool,
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Armed {
    period: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables ticking; the interval is armed on the next `sync` or `poll`.
    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Cancels ticking. No tick fires after this until `start` is called again.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.armed = None;
    }

    /// Returns true while an interval is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns the armed period, if any.
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.armed.map(|armed| armed.period)
    }

    /// Aligns the timer with `state`.
    ///
    /// Arms when a session is running, disarms when it is not, and re-arms
    /// from `now` when the speed differs from the armed period. Pausing keeps
    /// the session running, so it leaves the phase untouched.
    pub fn sync(&mut self, state: &GameState, now: Instant) {
        if !self.enabled || !state.status.is_running() {
            self.armed = None;
            return;
        }

        let period = Duration::from_millis(state.speed_ms);
        match self.armed {
            Some(armed) if armed.period == period => {}
            _ => {
                trace!(period_ms = state.speed_ms, "tick interval armed");
                self.armed = Some(Armed {
                    period,
                    next_due: now + period,
                });
            }
        }
    }

    /// Time left before the next tick is due, or `None` when disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|armed| armed.next_due.saturating_duration_since(now))
    }

    /// Runs at most one tick if the deadline has passed.
    ///
    /// Returns the tick outcome when a tick fired.
    pub fn poll(&mut self, state: &mut GameState, now: Instant) -> Option<TickOutcome> {
        self.sync(state, now);

        let armed = self.armed.as_mut()?;
        if now < armed.next_due {
            return None;
        }
        armed.next_due = now + armed.period;

        let outcome = state.tick();
        self.sync(state, now);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::{INITIAL_SPEED_MS, MIN_SPEED_MS};
    use crate::game::{GameState, GameStatus, TickOutcome};
    use crate::snake::{Position, Snake};

    use super::TickScheduler;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn running() -> (GameState, TickScheduler, Instant) {
        let mut state = GameState::new_with_seed(21);
        state.init_game();
        state.food = Position { x: 0, y: 0 };

        let mut scheduler = TickScheduler::new();
        scheduler.start();
        let now = Instant::now();
        scheduler.sync(&state, now);

        (state, scheduler, now)
    }

    #[test]
    fn does_not_arm_before_a_game_starts() {
        let mut state = GameState::new_with_seed(20);
        let mut scheduler = TickScheduler::new();
        scheduler.start();
        let now = Instant::now();

        assert_eq!(scheduler.poll(&mut state, now + ms(1000)), None);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.time_until_due(now), None);
    }

    #[test]
    fn ticks_once_per_period() {
        let (mut state, mut scheduler, start) = running();

        assert_eq!(scheduler.period(), Some(ms(INITIAL_SPEED_MS)));
        assert_eq!(scheduler.poll(&mut state, start + ms(149)), None);
        assert_eq!(
            scheduler.poll(&mut state, start + ms(150)),
            Some(TickOutcome::Moved)
        );
        assert_eq!(scheduler.poll(&mut state, start + ms(200)), None);
        assert_eq!(
            scheduler.time_until_due(start + ms(200)),
            Some(ms(100))
        );
        assert_eq!(
            scheduler.poll(&mut state, start + ms(300)),
            Some(TickOutcome::Moved)
        );
        assert_eq!(state.snake.head(), Position { x: 12, y: 10 });
    }

    #[test]
    fn speed_change_rearms_from_the_eating_tick() {
        let (mut state, mut scheduler, start) = running();
        state.food = Position { x: 11, y: 10 };

        let eat_at = start + ms(150);
        assert_eq!(scheduler.poll(&mut state, eat_at), Some(TickOutcome::Ate));
        assert_eq!(scheduler.period(), Some(ms(INITIAL_SPEED_MS - 2)));
        assert_eq!(scheduler.time_until_due(eat_at), Some(ms(148)));

        assert_eq!(scheduler.poll(&mut state, eat_at + ms(147)), None);
        assert!(scheduler.poll(&mut state, eat_at + ms(148)).is_some());
    }

    #[test]
    fn pause_keeps_the_interval_phase() {
        let (mut state, mut scheduler, start) = running();

        state.toggle_pause();
        scheduler.sync(&state, start + ms(40));
        assert_eq!(scheduler.time_until_due(start + ms(40)), Some(ms(110)));

        assert_eq!(
            scheduler.poll(&mut state, start + ms(150)),
            Some(TickOutcome::Idle)
        );
        assert_eq!(state.snake.head(), Position { x: 10, y: 10 });

        state.toggle_pause();
        scheduler.sync(&state, start + ms(220));
        assert_eq!(scheduler.time_until_due(start + ms(220)), Some(ms(80)));
        assert_eq!(
            scheduler.poll(&mut state, start + ms(300)),
            Some(TickOutcome::Moved)
        );
    }

    #[test]
    fn game_over_disarms_immediately() {
        let (mut state, mut scheduler, start) = running();
        state.snake = Snake::from_segments([Position { x: 19, y: 3 }]);

        assert!(matches!(
            scheduler.poll(&mut state, start + ms(150)),
            Some(TickOutcome::Collided(_))
        ));
        assert_eq!(state.status, GameStatus::GameOver);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.poll(&mut state, start + ms(10_000)), None);
    }

    #[test]
    fn restart_rearms_at_initial_speed() {
        let (mut state, mut scheduler, start) = running();
        state.speed_ms = MIN_SPEED_MS;
        state.status = GameStatus::GameOver;
        scheduler.sync(&state, start);
        assert!(!scheduler.is_armed());

        state.init_game();
        let restart = start + ms(500);
        scheduler.sync(&state, restart);

        assert_eq!(scheduler.period(), Some(ms(INITIAL_SPEED_MS)));
        assert_eq!(scheduler.time_until_due(restart), Some(ms(INITIAL_SPEED_MS)));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let (mut state, mut scheduler, start) = running();

        scheduler.stop();

        assert_eq!(scheduler.poll(&mut state, start + ms(1000)), None);
        assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
        assert!(!scheduler.is_armed());

        scheduler.start();
        scheduler.sync(&state, start + ms(1000));
        assert!(scheduler.is_armed());
    }
}
