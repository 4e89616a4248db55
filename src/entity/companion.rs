//! Companion (the girlfriend)
//!
//! Autonomous ally. Decision order each frame: attack any enemy inside the
//! melee hitbox, else close on an enemy inside the view range, else follow
//! the player (once outside a small dead zone) and mirror their jumps.
//! `can_move` is toggled from outside by the cage holding her.

use crate::event::Cue;
use crate::geom::Rect;

use super::physics::{self, FootContact, TopBand};
use super::{Body, Ctx, Damageable, Entity, Facing};

pub const WIDTH: f32 = 128.0;
pub const HEIGHT: f32 = 128.0;
pub const MAX_HEALTH: f32 = 150.0;
const SPEED: f32 = 6.0;
const ATTACK_DAMAGE: f32 = 2.0;
const VIEW_WIDTH: f32 = 500.0;
const VIEW_HEIGHT: f32 = 200.0;
const HITBOX_WIDTH: f32 = 64.0;
/// Horizontal slack on the hitbox test; keeps her swinging while the
/// enemy shuffles against her
const HITBOX_SLACK: f32 = 60.0;
/// No following until the player is this far away
const FOLLOW_DEAD_ZONE: f32 = 50.0;
/// Mirror the player's jump once they are this much higher
const JUMP_MIRROR_GAP: f32 = 10.0;
const JUMP_IMPULSE: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanionState {
    #[default]
    Idle,
    Running,
    Jumping,
    Attacking,
}

pub struct Companion {
    pub body: Body,
    pub health: f32,
    pub can_move: bool,
    pub state: CompanionState,
}

impl Companion {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, WIDTH, HEIGHT),
            health: MAX_HEALTH,
            can_move: true,
            state: CompanionState::Idle,
        }
    }

    /// Melee hitbox in front of her, zero height (centerline test).
    pub fn hitbox(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x + self.body.width - HITBOX_WIDTH,
            Facing::Left => self.body.x + self.body.width / 2.0 - HITBOX_WIDTH,
        };
        let y = self.body.y + self.body.height / 2.0;
        Rect::new(x, y, HITBOX_WIDTH, 0.0)
    }

    pub fn view_range(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x,
            Facing::Left => self.body.x - VIEW_WIDTH / 2.0 - self.body.width,
        };
        Rect::new(x, self.body.y, VIEW_WIDTH, VIEW_HEIGHT)
    }

    pub fn update(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) -> bool {
        let engaged = self.engage_enemies(others);
        if !engaged && self.can_move {
            self.follow_player(others, ctx);
        }

        physics::integrate_gravity(&mut self.body);
        let ride = physics::settle_on_platforms(
            &mut self.body,
            others,
            FootContact::BottomCenter,
            TopBand::HalfHeight,
        );
        if let Some((vx, vy)) = ride {
            self.body.x += vx;
            self.body.y += vy;
        }
        physics::block_overhead(&mut self.body, others);
        physics::clamp_to_floor(&mut self.body, ctx.stage.floor);

        if !self.body.on_ground {
            self.state = CompanionState::Jumping;
        }

        false
    }

    /// Attack the first enemy in the hitbox, else close on anything in the
    /// view range. Returns true if any enemy held her attention.
    fn engage_enemies(&mut self, others: &mut [Entity]) -> bool {
        let mut engaged = false;

        for other in others.iter_mut() {
            let target = match other {
                Entity::Melee(m) => Some(m as &mut dyn Damageable),
                Entity::Ranged(r) => Some(r as &mut dyn Damageable),
                _ => None,
            };
            let Some(target) = target else { continue };
            let enemy_rect = target.bounds();

            if self.in_hitbox(&enemy_rect) {
                self.state = CompanionState::Attacking;
                target.apply_damage(ATTACK_DAMAGE);
                return true;
            }

            if self.in_view(&enemy_rect) {
                engaged = true;
                if enemy_rect.x > self.body.x + HITBOX_WIDTH {
                    self.body.facing = Facing::Right;
                    self.body.x += SPEED;
                } else if enemy_rect.x < self.body.x - HITBOX_WIDTH {
                    self.body.facing = Facing::Left;
                    self.body.x -= SPEED;
                }
                self.state = CompanionState::Running;
            }
        }

        engaged
    }

    /// The hitbox test with slack: the enemy's span shifted by the slack
    /// must cross the hitbox, and the centerline must fall inside the
    /// enemy's vertical extent.
    fn in_hitbox(&self, enemy: &Rect) -> bool {
        let hitbox = self.hitbox();
        enemy.right() + HITBOX_SLACK > hitbox.x
            && enemy.x + HITBOX_SLACK < hitbox.right()
            && enemy.bottom() > hitbox.y
            && enemy.y < hitbox.bottom()
    }

    fn in_view(&self, enemy: &Rect) -> bool {
        let view = self.view_range();
        enemy.center_x() > view.x
            && enemy.x < view.right()
            && enemy.center_y() > view.y
            && enemy.center_y() < view.bottom()
    }

    fn follow_player(&mut self, others: &[Entity], ctx: &mut Ctx) {
        for other in others {
            let Some(player) = other.as_player() else {
                continue;
            };

            if (self.body.x - player.body.x).abs() > FOLLOW_DEAD_ZONE {
                if self.body.x < player.body.x {
                    self.body.x += SPEED;
                    self.body.facing = Facing::Right;
                } else {
                    self.body.x -= SPEED;
                    self.body.facing = Facing::Left;
                }
                self.state = CompanionState::Running;
            } else {
                self.state = CompanionState::Idle;
            }

            // Mirror upward jumps
            if player.body.y < self.body.y - JUMP_MIRROR_GAP && self.body.on_ground {
                self.body.velocity_y = -JUMP_IMPULSE;
                self.body.on_ground = false;
                self.state = CompanionState::Jumping;
                ctx.events.cues.send(Cue::Jump);
            }

            break;
        }
    }
}
