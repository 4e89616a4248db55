//! Spike hazard
//!
//! One-shot punishment: touching a spike costs a life and bounces the
//! player back to the current spawn point with health restored. It never
//! plays the death animation and never ends the run by itself; running out
//! of lives on spikes just leaves the player at zero.
//!
//! The hit window is deliberately narrow: only the player's center column
//! and lower half count, so clipping a spike with sprite padding doesn't
//! trigger it.

use crate::geom::Rect;

use super::{player, Entity};

pub const WIDTH: f32 = 50.0;
pub const HEIGHT: f32 = 20.0;

pub struct Spike {
    pub x: f32,
    pub y: f32,
}

impl Spike {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, WIDTH, HEIGHT)
    }

    pub fn update(&mut self, others: &mut [Entity]) -> bool {
        let spike = self.rect();
        for other in others.iter_mut() {
            let Some(p) = other.as_player_mut() else {
                continue;
            };
            let body = p.bounds();
            let cx = body.center_x();
            let touched = cx > spike.x
                && cx < spike.right()
                && body.bottom() > spike.y
                && body.y + body.h / 2.0 < spike.bottom();
            if touched {
                p.lives = p.lives.saturating_sub(1);
                p.body.x = p.spawn_point.0;
                p.body.y = p.spawn_point.1;
                p.body.velocity_y = 0.0;
                p.health = player::MAX_HEALTH;
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
    fn test_touch_costs_life_and_resets_to_spawn() {
        let mut spike = Spike::new(200.0, 480.0);
        let mut player = Player::new(170.0, 380.0);
        player.spawn_point = (10.0, 20.0);
        player.health = 40.0;
        player.lives = 3;
        let mut others = vec![Entity::Player(player)];
        spike.update(&mut others);

        let Entity::Player(p) = &others[0] else {
            panic!()
        };
        assert_eq!(p.lives, 2);
        assert_eq!((p.body.x, p.body.y), (10.0, 20.0));
        assert_eq!(p.health, player::MAX_HEALTH);
        assert_eq!(p.body.velocity_y, 0.0);
        assert!(!p.is_dead);
    }

    #[test]
    fn test_narrow_window_misses_side_overlap() {
        let mut spike = Spike::new(200.0, 480.0);
        // The sprite overlaps the spike but the center column is left of it
        let player = Player::new(100.0, 380.0);
        let mut others = vec![Entity::Player(player)];
        spike.update(&mut others);

        let Entity::Player(p) = &others[0] else {
            panic!()
        };
        assert_eq!(p.lives, 3);
    }

    #[test]
    fn test_lives_never_go_negative() {
        let mut spike = Spike::new(200.0, 480.0);
        let mut player = Player::new(170.0, 380.0);
        player.lives = 0;
        let mut others = vec![Entity::Player(player)];
        spike.update(&mut others);

        let Entity::Player(p) = &others[0] else {
            panic!()
        };
        assert_eq!(p.lives, 0);
    }
}
