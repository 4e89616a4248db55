//! Pickups
//!
//! Single-use collectibles. Both kinds latch `picked_up` on the qualifying
//! overlap so a second evaluation can never double-apply the effect, then
//! request their own removal.

use crate::animation::Clip;
use crate::event::Cue;
use crate::geom::Rect;

use super::{player, Ctx, Entity};

pub const HEALTH_PACK_SIZE: f32 = 30.0;
pub const COIN_SIZE: f32 = 50.0;

/// Qualifying overlap for pickups: the item must start left of the player's
/// center column and otherwise overlap the body.
fn touches_player(item: &Rect, body: &Rect) -> bool {
    item.x < body.center_x()
        && item.right() > body.x
        && item.y < body.bottom()
        && item.bottom() > body.y
}

/// Restores the player to full health. Only a hurt player can pick it up.
pub struct HealthPack {
    pub x: f32,
    pub y: f32,
    pub picked_up: bool,
}

impl HealthPack {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            picked_up: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, HEALTH_PACK_SIZE, HEALTH_PACK_SIZE)
    }

    pub fn update(&mut self, others: &mut [Entity], ctx: &mut Ctx) -> bool {
        for other in others.iter_mut() {
            let Some(p) = other.as_player_mut() else {
                continue;
            };
            if !self.picked_up
                && p.health < player::MAX_HEALTH
                && touches_player(&self.rect(), &p.bounds())
            {
                p.health = (p.health + 100.0).min(player::MAX_HEALTH);
                self.picked_up = true;
                ctx.events.cues.send(Cue::HealthPickup);
            }
        }
        self.picked_up
    }
}

/// Worth one point of score.
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub picked_up: bool,
    /// Spin animation
    pub clip: Clip,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            picked_up: false,
            clip: Clip::new(6, 6.0),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }

    pub fn update(&mut self, others: &mut [Entity], ctx: &mut Ctx) -> bool {
        self.clip.tick();
        for other in others.iter_mut() {
            let Some(p) = other.as_player_mut() else {
                continue;
            };
            if !self.picked_up && touches_player(&self.rect(), &p.bounds()) {
                p.score += 1;
                self.picked_up = true;
                ctx.events.cues.send(Cue::CoinPickup);
            }
        }
        self.picked_up
    }
}
