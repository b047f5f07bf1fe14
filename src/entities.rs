/// All game entity types — pure data, plus a few derived views.

use crate::config::Config;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world units, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True when the interiors intersect.  Rectangles that only share an
    /// edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Avatar ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mood {
    Happy,
    Sad,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Avatar {
    pub rect: Rect,
    /// Vertical velocity; positive is downward.
    pub velocity: f32,
    pub mood: Mood,
}

impl Avatar {
    /// The avatar at its canonical start position, at rest.
    pub fn spawn(config: &Config) -> Self {
        let size = config.avatar_size;
        let (cx, cy) = config.avatar_spawn;
        Avatar {
            rect: Rect::new(cx - size / 2.0, cy - size / 2.0, size, size),
            velocity: 0.0,
            mood: Mood::Happy,
        }
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Anchored at the top of the playfield.
    pub top: Rect,
    /// Starts `gap` below the top blocker and reaches the bottom.
    pub bottom: Rect,
    /// Set once the avatar has passed; an obstacle scores at most once.
    pub scored: bool,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    pub fn shift_left(&mut self, dx: f32) {
        self.top.x -= dx;
        self.bottom.x -= dx;
    }

    pub fn hits(&self, rect: &Rect) -> bool {
        self.top.overlaps(rect) || self.bottom.overlaps(rect)
    }
}

// ── Powerups ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerupKind {
    /// Absorbs exactly one collision.
    Shield,
    /// Each passed obstacle scores 2 instead of 1.
    DoubleScore,
    /// Horizontal scroll speed is halved.
    SlowMotion,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [
        PowerupKind::Shield,
        PowerupKind::DoubleScore,
        PowerupKind::SlowMotion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PowerupKind::Shield => "SHIELD",
            PowerupKind::DoubleScore => "DOUBLE",
            PowerupKind::SlowMotion => "SLOW",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Powerup {
    pub rect: Rect,
    pub kind: PowerupKind,
}

/// The single powerup currently in effect and the tick it stops at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerupKind,
    pub expires_at: u64,
}

impl ActiveEffect {
    pub fn is_live(&self, now: u64) -> bool {
        now < self.expires_at
    }

    /// Whole seconds left, rounded up; used by the HUD.
    pub fn seconds_left(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now).div_ceil(1000)
    }
}

/// Booleans derived from `GameState::effect`.  Never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectFlags {
    pub shield: bool,
    pub double_score: bool,
    pub slow_motion: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Active,
    GameOver,
}

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: Config,
    pub avatar: Avatar,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<Powerup>,
    pub effect: Option<ActiveEffect>,
    pub score: u32,
    /// Best score across the session; never decreases.
    pub high_score: u32,
    pub status: GameStatus,
    /// Debug mode: obstacles and walls are ignored.
    pub no_collision: bool,
    /// Frames simulated since the session began.
    pub frame: u64,
}

impl GameState {
    /// Flags for the effect in force at `now`.  At most one is ever true.
    pub fn flags(&self, now: u64) -> EffectFlags {
        match self.effect {
            Some(effect) if effect.is_live(now) => EffectFlags {
                shield: effect.kind == PowerupKind::Shield,
                double_score: effect.kind == PowerupKind::DoubleScore,
                slow_motion: effect.kind == PowerupKind::SlowMotion,
            },
            _ => EffectFlags::default(),
        }
    }
}
