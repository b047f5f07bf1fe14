/// Frame-level orchestration, independent of the terminal.
///
/// A `Session` owns the game state, the score store and the RNG.  Each call
/// to `frame` drains that frame's input events, appends any due timer events,
/// dispatches them in order and then advances the simulation one step.

use rand::Rng;
use tracing::info;

use crate::compute::{add_obstacle, add_powerup, init_state, jump, tick, toggle_no_collision};
use crate::config::Config;
use crate::entities::{GameState, GameStatus};
use crate::highscore::ScoreStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    /// Jump while active, restart after game over.
    Jump,
    ToggleNoCollision,
    SpawnObstacle,
    SpawnPowerup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    fn flipped(self) -> Theme {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

// ── Interval timer ────────────────────────────────────────────────────────────

/// Fires once per elapsed period, measured on the caller's millisecond clock.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    period_ms: u64,
    next_due_ms: u64,
}

impl IntervalTimer {
    pub fn new(period_ms: u64, now: u64) -> Self {
        let period_ms = period_ms.max(1);
        IntervalTimer {
            period_ms,
            next_due_ms: now + period_ms,
        }
    }

    /// Number of periods that elapsed since the last call.
    pub fn due(&mut self, now: u64) -> u32 {
        let mut fired = 0;
        while now >= self.next_due_ms {
            self.next_due_ms += self.period_ms;
            fired += 1;
        }
        fired
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

pub struct Session<S: ScoreStore, R: Rng> {
    state: GameState,
    store: S,
    rng: R,
    obstacle_timer: IntervalTimer,
    powerup_timer: IntervalTimer,
    theme_timer: IntervalTimer,
    theme: Theme,
    running: bool,
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    pub fn new(config: Config, mut store: S, rng: R, now: u64) -> Self {
        let high_score = store.load();
        info!(high_score, "session started");
        Session {
            state: init_state(config, high_score),
            store,
            rng,
            obstacle_timer: IntervalTimer::new(config.obstacle_interval_ms, now),
            powerup_timer: IntervalTimer::new(config.powerup_interval_ms, now),
            theme_timer: IntervalTimer::new(config.theme_period_ms, now),
            theme: Theme::Day,
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios and tests.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame at tick `now`.  Does nothing once the session has quit.
    pub fn frame(&mut self, inputs: impl IntoIterator<Item = GameEvent>, now: u64) {
        if !self.running {
            return;
        }
        let high_before = self.state.high_score;

        let mut events: Vec<GameEvent> = inputs.into_iter().collect();
        for _ in 0..self.obstacle_timer.due(now) {
            events.push(GameEvent::SpawnObstacle);
        }
        for _ in 0..self.powerup_timer.due(now) {
            events.push(GameEvent::SpawnPowerup);
        }

        for event in events {
            self.dispatch(event);
            if !self.running {
                return;
            }
        }

        if self.state.status == GameStatus::Active {
            self.state = tick(&self.state, now);
        }

        if self.theme_timer.due(now) % 2 == 1 {
            self.theme = self.theme.flipped();
        }

        if self.state.high_score > high_before {
            self.store.save(self.state.high_score);
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::Quit => self.quit(),
            GameEvent::Jump => self.state = jump(&self.state),
            GameEvent::ToggleNoCollision => self.state = toggle_no_collision(&self.state),
            GameEvent::SpawnObstacle => self.state = add_obstacle(&self.state, &mut self.rng),
            GameEvent::SpawnPowerup => self.state = add_powerup(&self.state, &mut self.rng),
        }
    }

    /// Persist the high score and stop.  Safe to call more than once.
    pub fn quit(&mut self) {
        if !self.running {
            return;
        }
        info!(high_score = self.state.high_score, "quitting");
        self.store.save(self.state.high_score);
        self.running = false;
    }
}
