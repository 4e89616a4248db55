//! Wall
//!
//! Vertical obstacle. Not a landing surface: it blocks horizontal traversal
//! by pushing overlapping bodies out to the nearer side, and contact
//! revokes the player's dash (no dashing through walls). The boss's death
//! flags walls for removal, which is how the endgame path opens.

use crate::geom::Rect;

use super::{Body, Bullet, Entity};

pub struct Wall {
    pub rect: Rect,
    /// Set externally (boss death); the wall removes itself next sweep
    pub remove: bool,
}

impl Wall {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            remove: false,
        }
    }

    pub fn update(&mut self, others: &mut [Entity]) -> bool {
        for other in others.iter_mut() {
            other.apply_wall_block(&self.rect);
        }
        self.remove
    }
}

/// Push a body out horizontally if its vertical midpoint is inside the
/// wall's span. Returns true on contact (the player loses its dash then).
pub fn block_horizontal(wall: &Rect, body: &mut Body) -> bool {
    let mid = body.y + body.height / 2.0;
    if mid <= wall.y || mid >= wall.bottom() {
        return false;
    }
    if body.x >= wall.right() || body.x + body.width <= wall.x {
        return false;
    }

    // Out to the nearer side
    if body.center_x() < wall.center_x() {
        body.x = wall.x - body.width;
    } else {
        body.x = wall.right();
    }
    true
}

/// Bullets are stopped by walls too.
pub fn block_bullet(wall: &Rect, bullet: &mut Bullet) {
    let rect = bullet.rect();
    let mid = rect.center_y();
    if mid <= wall.y || mid >= wall.bottom() {
        return;
    }
    if rect.x >= wall.right() || rect.right() <= wall.x {
        return;
    }
    if rect.center_x() < wall.center_x() {
        bullet.x = wall.x - rect.w;
    } else {
        bullet.x = wall.right();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Facing, Player};

    #[test]
    fn test_pushes_body_to_nearer_side() {
        let wall = Rect::new(500.0, 200.0, 50.0, 300.0);
        // Approaching from the left, overlapping
        let mut body = Body::new(420.0, 300.0, 128.0, 128.0);
        assert!(block_horizontal(&wall, &mut body));
        assert_eq!(body.x, 500.0 - 128.0);

        // Approaching from the right
        let mut body = Body::new(530.0, 300.0, 128.0, 128.0);
        assert!(block_horizontal(&wall, &mut body));
        assert_eq!(body.x, 550.0);
    }

    #[test]
    fn test_no_block_outside_vertical_span() {
        let wall = Rect::new(500.0, 200.0, 50.0, 100.0);
        // Body entirely below the wall
        let mut body = Body::new(450.0, 400.0, 128.0, 128.0);
        assert!(!block_horizontal(&wall, &mut body));
        assert_eq!(body.x, 450.0);
    }

    #[test]
    fn test_wall_contact_revokes_player_dash() {
        let mut wall = Wall::new(500.0, 200.0, 50.0, 300.0);
        let mut player = Player::new(420.0, 300.0);
        player.can_dash = true;
        let mut others = vec![Entity::Player(player)];
        assert!(!wall.update(&mut others));

        let Entity::Player(player) = &others[0] else {
            panic!()
        };
        assert!(!player.can_dash);
        assert_eq!(player.body.x, 372.0);
    }

    #[test]
    fn test_flagged_wall_requests_removal() {
        let mut wall = Wall::new(0.0, 0.0, 50.0, 300.0);
        wall.remove = true;
        let mut others = Vec::new();
        assert!(wall.update(&mut others));
    }

    #[test]
    fn test_blocks_bullet() {
        let wall = Rect::new(500.0, 0.0, 50.0, 300.0);
        let mut bullet = Bullet::new(495.0, 100.0, Facing::Right);
        block_bullet(&wall, &mut bullet);
        assert_eq!(bullet.x, 490.0);
    }
}
