//! Bullet
//!
//! Constant-speed horizontal projectile. Only ever tests against the
//! player: a hit on a raised shield consumes the bullet for free, anything
//! else costs the player a fixed chunk of health. A consumed bullet asks
//! for removal on the evaluation after the hit.

use crate::geom::Rect;

use super::{Entity, Facing};

pub const WIDTH: f32 = 10.0;
pub const HEIGHT: f32 = 5.0;
const SPEED: f32 = 7.0;
pub const DAMAGE: f32 = 5.0;

pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub active: bool,
}

impl Bullet {
    pub fn new(x: f32, y: f32, facing: Facing) -> Self {
        Self {
            x,
            y,
            facing,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, WIDTH, HEIGHT)
    }

    pub fn update(&mut self, others: &mut [Entity]) -> bool {
        if !self.active {
            return true;
        }

        self.x += SPEED * self.facing.sign();

        for other in others.iter_mut() {
            let Some(player) = other.as_player_mut() else {
                continue;
            };
            // The bullet has to cross the player's center column
            let center = player.body.center_x();
            let hit = self.x + WIDTH > center
                && self.x < center
                && self.y + HEIGHT > player.body.y
                && self.y < player.body.bottom();
            if hit {
                if !player.is_shielding {
                    player.take_damage(DAMAGE);
                }
                self.active = false;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Player;

    #[test]
    fn test_hit_deals_exact_damage_and_consumes() {
        let player = Player::new(200.0, 100.0);
        let center = player.body.center_x();
        let mut others = vec![Entity::Player(player)];
        // One step short of crossing the center column
        let mut bullet = Bullet::new(center - WIDTH - 3.0, 150.0, Facing::Right);

        assert!(!bullet.update(&mut others));
        let Entity::Player(p) = &others[0] else {
            panic!()
        };
        assert!(!bullet.active);
        assert_eq!(p.health, 95.0);

        // Consumed: removal on the following evaluation
        assert!(bullet.update(&mut others));
        let Entity::Player(p) = &others[0] else {
            panic!()
        };
        assert_eq!(p.health, 95.0); // no double hit
    }

    #[test]
    fn test_shield_blocks_damage_but_consumes_bullet() {
        let mut player = Player::new(200.0, 100.0);
        player.is_shielding = true;
        let center = player.body.center_x();
        let mut others = vec![Entity::Player(player)];
        let mut bullet = Bullet::new(center - WIDTH - 3.0, 150.0, Facing::Right);

        assert!(!bullet.update(&mut others));
        assert!(!bullet.active);
        let Entity::Player(p) = &others[0] else {
            panic!()
        };
        assert_eq!(p.health, 100.0);
        assert!(bullet.update(&mut others));
    }

    #[test]
    fn test_flies_past_out_of_band() {
        let player = Player::new(200.0, 100.0);
        let mut others = vec![Entity::Player(player)];
        // Above the player's head
        let mut bullet = Bullet::new(200.0, 20.0, Facing::Right);
        for _ in 0..20 {
            assert!(!bullet.update(&mut others));
        }
        assert!(bullet.active);
    }

    #[test]
    fn test_travels_left() {
        let mut bullet = Bullet::new(100.0, 0.0, Facing::Left);
        let mut others = Vec::new();
        bullet.update(&mut others);
        assert_eq!(bullet.x, 93.0);
    }
}
