/// Tunable game constants.
///
/// The simulation runs in fixed world units (a 400 × 600 playfield); the
/// renderer scales them to whatever terminal it finds.  All speeds and
/// accelerations are per frame, all durations are in milliseconds.

pub const DEFAULT_SCORE_FILE: &str = "flappy_bird_highscore.txt";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub world_width: f32,
    pub world_height: f32,

    // ── Avatar ───────────────────────────────────────────────────────────────
    pub avatar_size: f32,
    /// Centre of the avatar at start and after every restart.
    pub avatar_spawn: (f32, f32),
    pub gravity: f32,
    /// Velocity set (not added) by a jump.
    pub jump_velocity: f32,

    // ── Obstacles ────────────────────────────────────────────────────────────
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    /// Inclusive range for the height of the top blocker.
    pub obstacle_min_top: i32,
    pub obstacle_max_top: i32,
    pub obstacle_speed: f32,
    pub obstacle_slow_speed: f32,

    // ── Powerups ─────────────────────────────────────────────────────────────
    pub powerup_size: f32,
    pub powerup_min_y: i32,
    pub powerup_max_y: i32,
    pub powerup_speed: f32,
    pub powerup_slow_speed: f32,
    pub effect_duration_ms: u64,

    // ── Timers ───────────────────────────────────────────────────────────────
    pub obstacle_interval_ms: u64,
    pub powerup_interval_ms: u64,
    pub theme_period_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            world_width: 400.0,
            world_height: 600.0,

            avatar_size: 60.0,
            avatar_spawn: (100.0, 300.0),
            gravity: 0.5,
            jump_velocity: -8.0,

            obstacle_width: 70.0,
            obstacle_gap: 150.0,
            obstacle_min_top: 100,
            obstacle_max_top: 400,
            obstacle_speed: 4.0,
            obstacle_slow_speed: 2.0,

            powerup_size: 30.0,
            powerup_min_y: 100,
            powerup_max_y: 500,
            powerup_speed: 3.0,
            powerup_slow_speed: 1.5,
            effect_duration_ms: 5000,

            obstacle_interval_ms: 1500,
            powerup_interval_ms: 7000,
            theme_period_ms: 20_000,
        }
    }
}
