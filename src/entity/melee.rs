//! Melee enemy (the raider)
//!
//! Ground fighter with the standard zone priority: contact hitbox beats
//! chase beats idle. Inside the hitbox it grinds the player's health down
//! every frame unless the shield is up; inside the view range it runs
//! toward the player. Death plays out a timer before the registry removes
//! the corpse.

use crate::animation::Clip;
use crate::event::Cue;
use crate::geom::{center_in_zone, Rect};
use crate::TICK_MS;

use super::physics::{self, FootContact, TopBand};
use super::{Body, Ctx, Damageable, Entity, Facing};

pub const WIDTH: f32 = 128.0;
pub const HEIGHT: f32 = 128.0;
pub const MAX_HEALTH: f32 = 200.0;
const SPEED: f32 = 3.0;
const CONTACT_DAMAGE: f32 = 1.0;
const VIEW_WIDTH: f32 = 500.0;
const VIEW_HEIGHT: f32 = 200.0;
const HITBOX_WIDTH: f32 = 64.0;
/// Landing tolerance below a platform top
const LANDING_BAND: f32 = 10.0;
/// Death clip plays at 4x speed
const DEATH_TIME_SCALE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeleeState {
    #[default]
    Idle,
    Chasing,
    Attacking,
    Dead,
}

pub struct MeleeEnemy {
    pub body: Body,
    pub health: f32,
    pub state: MeleeState,
    pub is_taking_damage: bool,
    pub is_dead: bool,
    death_elapsed_ms: f32,
    pub death_clip: Clip,
}

impl MeleeEnemy {
    pub fn new(x: f32, y: f32, facing: Facing) -> Self {
        let mut body = Body::new(x, y, WIDTH, HEIGHT);
        body.facing = facing;
        Self {
            body,
            health: MAX_HEALTH,
            state: MeleeState::Idle,
            is_taking_damage: false,
            is_dead: false,
            death_elapsed_ms: 0.0,
            death_clip: Clip::new(4, 2.0),
        }
    }

    /// Contact damage zone held out in front. Zero-height: the test reduces
    /// to the target's span crossing the hitbox line.
    pub fn hitbox(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x + self.body.width - HITBOX_WIDTH,
            Facing::Left => self.body.x + self.body.width / 2.0 - HITBOX_WIDTH,
        };
        let y = self.body.y + self.body.height / 2.0;
        Rect::new(x, y, HITBOX_WIDTH, 0.0)
    }

    /// Detection rectangle in front of the enemy.
    pub fn view_range(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x,
            Facing::Left => self.body.x - VIEW_WIDTH / 2.0 - self.body.width,
        };
        Rect::new(x, self.body.y, VIEW_WIDTH, VIEW_HEIGHT)
    }

    pub fn update(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) -> bool {
        if self.health <= 0.0 && !self.is_dead {
            self.is_dead = true;
            self.state = MeleeState::Dead;
            self.death_clip.reset();
            self.death_elapsed_ms = 0.0;
            ctx.events.cues.send(Cue::EnemyHurt);
        }

        if self.is_dead {
            // No movement, no damage; just run out the death clock
            self.death_clip.advance(TICK_MS * DEATH_TIME_SCALE);
            self.death_elapsed_ms += TICK_MS * DEATH_TIME_SCALE;
            return self.death_elapsed_ms >= self.death_clip.total_ms();
        }

        physics::integrate_gravity(&mut self.body);
        physics::settle_on_platforms(
            &mut self.body,
            others,
            FootContact::CenterPastLeft,
            TopBand::Pixels(LANDING_BAND),
        );
        physics::clamp_to_floor(&mut self.body, ctx.stage.floor);

        self.engage_player(others);

        if self.is_taking_damage {
            ctx.events.cues.send(Cue::EnemyHurt);
            self.is_taking_damage = false;
        }

        false
    }

    /// Zone priority: hitbox > view range > idle.
    fn engage_player(&mut self, others: &mut [Entity]) {
        for other in others.iter_mut() {
            let Some(player) = other.as_player_mut() else {
                continue;
            };
            let player_rect = player.bounds();

            if center_in_zone(&player_rect, &self.hitbox()) {
                if !player.is_shielding {
                    self.state = MeleeState::Attacking;
                    player.take_damage(CONTACT_DAMAGE);
                }
            } else if self.sees(&player_rect) {
                self.body.facing = Facing::toward(self.body.x, player_rect.x);
                self.body.x += SPEED * self.body.facing.sign();
                self.state = MeleeState::Chasing;
            } else {
                self.state = MeleeState::Idle;
            }
        }
    }

    /// Center column past the left edge, body bottom inside the vertical
    /// window. Slightly asymmetric on purpose; this is the tuned detection
    /// window for this kind.
    fn sees(&self, player: &Rect) -> bool {
        let view = self.view_range();
        player.center_x() > view.x
            && player.x < view.right()
            && player.bottom() > view.y
            && player.y + player.h / 2.0 < view.bottom()
    }
}

impl Damageable for MeleeEnemy {
    fn bounds(&self) -> Rect {
        self.body.rect()
    }

    fn apply_damage(&mut self, amount: f32) {
        if self.is_dead {
            return;
        }
        self.health -= amount;
        self.is_taking_damage = true;
    }

    fn is_dead(&self) -> bool {
        self.is_dead
    }
}
