/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle or the current tick) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG.

use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::entities::{
    ActiveEffect, Avatar, GameState, GameStatus, Mood, Powerup, PowerupKind,
};
use crate::spawn::{spawn_obstacle, spawn_powerup};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial state of a session.
pub fn init_state(config: Config, high_score: u32) -> GameState {
    GameState {
        avatar: Avatar::spawn(&config),
        obstacles: Vec::new(),
        powerups: Vec::new(),
        effect: None,
        score: 0,
        high_score,
        status: GameStatus::Active,
        no_collision: false,
        frame: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// The jump key: an upward impulse while active, a restart after game over.
pub fn jump(state: &GameState) -> GameState {
    match state.status {
        GameStatus::Active => flap(state),
        GameStatus::GameOver => restart(state),
    }
}

/// Set (not add) the jump velocity.  Ignored after game over.
pub fn flap(state: &GameState) -> GameState {
    if state.status != GameStatus::Active {
        return state.clone();
    }
    GameState {
        avatar: Avatar {
            velocity: state.config.jump_velocity,
            ..state.avatar.clone()
        },
        ..state.clone()
    }
}

/// Back to a fresh round.  Only the high score and the frame counter carry
/// over.
pub fn restart(state: &GameState) -> GameState {
    info!(high_score = state.high_score, "restarting round");
    GameState {
        frame: state.frame,
        ..init_state(state.config, state.high_score)
    }
}

pub fn toggle_no_collision(state: &GameState) -> GameState {
    let no_collision = !state.no_collision;
    info!(no_collision, "collision debug mode toggled");
    GameState {
        no_collision,
        ..state.clone()
    }
}

// ── Timer-driven spawns ──────────────────────────────────────────────────────

/// Append a new obstacle pair.  Spawning only happens while active.
pub fn add_obstacle(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Active {
        return state.clone();
    }
    let obstacle = spawn_obstacle(&state.config, rng);
    debug!(gap_top = obstacle.top.h, "obstacle spawned");
    let mut obstacles = state.obstacles.clone();
    obstacles.push(obstacle);
    GameState {
        obstacles,
        ..state.clone()
    }
}

/// Append a new powerup.  Spawning only happens while active.
pub fn add_powerup(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Active {
        return state.clone();
    }
    let powerup = spawn_powerup(&state.config, rng);
    debug!(kind = ?powerup.kind, y = powerup.rect.y, "powerup spawned");
    let mut powerups = state.powerups.clone();
    powerups.push(powerup);
    GameState {
        powerups,
        ..state.clone()
    }
}

// ── Powerup effect timer ─────────────────────────────────────────────────────

/// Drop the active effect once its expiry tick has been reached.
pub fn expire_effect(state: &GameState, now: u64) -> GameState {
    let mut next = state.clone();
    clear_expired(&mut next, now);
    next
}

fn clear_expired(state: &mut GameState, now: u64) {
    if let Some(effect) = state.effect {
        if !effect.is_live(now) {
            debug!(kind = ?effect.kind, "effect expired");
            state.effect = None;
        }
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Horizontal speeds for (obstacles, powerups).  Slow motion applies to both.
pub fn scroll_speeds(config: &Config, slow_motion: bool) -> (f32, f32) {
    if slow_motion {
        (config.obstacle_slow_speed, config.powerup_slow_speed)
    } else {
        (config.obstacle_speed, config.powerup_speed)
    }
}

/// Advance the simulation by one frame at tick `now` (milliseconds).
///
/// Order matters: physics, scrolling, obstacle collision, scoring, pickups,
/// effect expiry, then the wall check.  At most one collision is resolved per
/// frame, and a death ends the frame immediately.
pub fn tick(state: &GameState, now: u64) -> GameState {
    if state.status != GameStatus::Active {
        return state.clone();
    }
    let mut next = state.clone();
    let config = next.config;
    next.frame += 1;

    // ── 1. Gravity ───────────────────────────────────────────────────────────
    next.avatar.velocity += config.gravity;
    next.avatar.rect.y += next.avatar.velocity;

    // ── 2. Scroll and prune ──────────────────────────────────────────────────
    let (obstacle_speed, powerup_speed) = scroll_speeds(&config, next.flags(now).slow_motion);
    for obstacle in &mut next.obstacles {
        obstacle.shift_left(obstacle_speed);
    }
    next.obstacles.retain(|o| o.right() > 0.0);
    for powerup in &mut next.powerups {
        powerup.rect.x -= powerup_speed;
    }
    next.powerups.retain(|p| p.rect.right() > 0.0);

    // ── 3. Obstacle collision ────────────────────────────────────────────────
    let avatar = next.avatar.rect;
    let mut resolved = false;
    if !next.no_collision && next.obstacles.iter().any(|o| o.hits(&avatar)) {
        resolve_hit(&mut next, now);
        resolved = true;
        if next.status == GameStatus::GameOver {
            return next;
        }
    }

    // ── 4. Scoring ───────────────────────────────────────────────────────────
    let gain = if next.flags(now).double_score { 2 } else { 1 };
    for obstacle in &mut next.obstacles {
        if !obstacle.scored && obstacle.bottom.right() < avatar.left() {
            obstacle.scored = true;
            next.score += gain;
        }
    }

    // ── 5. Pickups ───────────────────────────────────────────────────────────
    let mut picked: Option<PowerupKind> = None;
    next.powerups.retain(|p: &Powerup| {
        if p.rect.overlaps(&avatar) {
            picked = Some(p.kind);
            false
        } else {
            true
        }
    });
    if let Some(kind) = picked {
        info!(?kind, "powerup collected");
        next.effect = Some(ActiveEffect {
            kind,
            expires_at: now + config.effect_duration_ms,
        });
    }

    // ── 6. Effect expiry ─────────────────────────────────────────────────────
    clear_expired(&mut next, now);

    // ── 7. Walls ─────────────────────────────────────────────────────────────
    let out_of_bounds = avatar.top() <= 0.0 || avatar.bottom() >= config.world_height;
    if !resolved && !next.no_collision && out_of_bounds {
        resolve_hit(&mut next, now);
    }

    next
}

/// A shield absorbs the hit; without one the avatar dies.
fn resolve_hit(state: &mut GameState, now: u64) {
    if state.flags(now).shield {
        info!("shield absorbed a collision");
        state.effect = None;
    } else {
        die(state);
    }
}

fn die(state: &mut GameState) {
    state.status = GameStatus::GameOver;
    state.avatar.mood = Mood::Sad;
    if state.score > state.high_score {
        info!(score = state.score, previous = state.high_score, "new high score");
        state.high_score = state.score;
    }
    info!(score = state.score, "game over");
}
