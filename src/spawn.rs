/// Obstacle and powerup spawners.
///
/// Both place the new entity flush with the right edge of the playfield.
/// All randomness comes through the injected RNG.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::entities::{Obstacle, Powerup, PowerupKind, Rect};

/// A fresh obstacle pair with the gap at a uniformly random height.
///
/// The top blocker spans `[0, top)`, the bottom blocker spans
/// `[top + gap, world_height)`.
pub fn spawn_obstacle(config: &Config, rng: &mut impl Rng) -> Obstacle {
    let top_h = rng.gen_range(config.obstacle_min_top..=config.obstacle_max_top) as f32;
    let bottom_y = top_h + config.obstacle_gap;
    let x = config.world_width;
    let w = config.obstacle_width;

    Obstacle {
        top: Rect::new(x, 0.0, w, top_h),
        bottom: Rect::new(x, bottom_y, w, (config.world_height - bottom_y).max(0.0)),
        scored: false,
    }
}

/// A fresh powerup of a uniformly random kind.
pub fn spawn_powerup(config: &Config, rng: &mut impl Rng) -> Powerup {
    let kind = *PowerupKind::ALL
        .choose(rng)
        .unwrap_or(&PowerupKind::Shield);
    let y = rng.gen_range(config.powerup_min_y..=config.powerup_max_y) as f32;
    let size = config.powerup_size;

    Powerup {
        rect: Rect::new(config.world_width, y, size, size),
        kind,
    }
}
