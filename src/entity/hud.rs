//! HUD-adjacent entities
//!
//! The score counter and lives indicator live in the entity list like
//! everything else: they read the player's state during the sweep and pin
//! themselves to the camera so they stay on screen. Health-bar buckets for
//! the player and the boss live here too; they are pure presentation
//! thresholds.

use super::{Ctx, Entity};

/// Discrete fill levels of a health bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Full,
    Good,
    Medium,
    Medium2,
    Low,
    Low2,
    Critical,
}

/// Bucket the player's health for the bar sprite.
pub fn player_health_level(health: f32) -> HealthLevel {
    if health >= 100.0 {
        HealthLevel::Full
    } else if health > 80.0 {
        HealthLevel::Good
    } else if health > 60.0 {
        HealthLevel::Medium
    } else if health > 50.0 {
        HealthLevel::Medium2
    } else if health > 30.0 {
        HealthLevel::Low
    } else if health > 20.0 {
        HealthLevel::Low2
    } else {
        HealthLevel::Critical
    }
}

/// Bucket the boss's health. Same bar, boss-sized thresholds. These only
/// feed presentation; the boss's behavior has no phases.
pub fn boss_health_level(health: f32) -> HealthLevel {
    if health >= 2500.0 {
        HealthLevel::Full
    } else if health > 2000.0 {
        HealthLevel::Good
    } else if health > 1700.0 {
        HealthLevel::Medium
    } else if health > 1300.0 {
        HealthLevel::Medium2
    } else if health > 800.0 {
        HealthLevel::Low
    } else if health > 500.0 {
        HealthLevel::Low2
    } else {
        HealthLevel::Critical
    }
}

/// Coin tally in the top-left, following the camera.
pub struct ScoreCounter {
    pub x: f32,
    pub y: f32,
    pub value: u32,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 15.0,
            value: 0,
        }
    }

    pub fn update(&mut self, others: &mut [Entity], ctx: &mut Ctx) -> bool {
        self.x = ctx.camera.x + 100.0;
        for other in others.iter() {
            if let Some(player) = other.as_player() {
                self.value = player.score;
            }
        }
        false
    }
}

impl Default for ScoreCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Remaining-lives pips next to the score.
pub struct LivesIndicator {
    pub x: f32,
    pub y: f32,
    pub lives: u32,
}

impl LivesIndicator {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 10.0,
            lives: 3,
        }
    }

    pub fn update(&mut self, others: &mut [Entity], ctx: &mut Ctx) -> bool {
        self.x = ctx.camera.x + 40.0;
        for other in others.iter() {
            if let Some(player) = other.as_player() {
                self.lives = player.lives;
            }
        }
        false
    }
}

impl Default for LivesIndicator {
    fn default() -> Self {
        Self::new()
    }
}
