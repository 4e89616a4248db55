//! Player (the samurai)
//!
//! User-controlled melee fighter. The state machine is evaluated in a fixed
//! precedence every frame: death first, then movement, air state, shield,
//! attack, dash. The attack hitbox only exists for the one update cycle in
//! which the attack resolves.
//!
//! Health and `dead` stay consistent: health at or below zero flips `dead`
//! the same frame; lives only drop (and health only refills) when the death
//! animation has fully played out.

use crate::animation::Clip;
use crate::event::{Cue, Transition};
use crate::geom::{center_half_in_zone, Rect};
use crate::TICK_MS;

use super::physics::{self, FootContact, TopBand};
use super::{Body, Ctx, Entity, Facing};

pub const WIDTH: f32 = 128.0;
pub const HEIGHT: f32 = 128.0;
pub const MAX_HEALTH: f32 = 100.0;
pub const STARTING_LIVES: u32 = 3;
const SPEED: f32 = 8.0;
const JUMP_STRENGTH: f32 = 14.0;
const DASH_DISTANCE: f32 = 100.0;
const DASH_COOLDOWN_FRAMES: u32 = 50;
const LIGHT_ATTACK_DAMAGE: f32 = 5.0;
const HEAVY_ATTACK_DAMAGE: f32 = 10.0;
/// The death clip plays at double speed
const DEATH_TIME_SCALE: f32 = 2.0;

/// The two sword swings, mapped to the X and C keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Light,
    Heavy,
}

impl AttackKind {
    fn damage(self) -> f32 {
        match self {
            AttackKind::Light => LIGHT_ATTACK_DAMAGE,
            AttackKind::Heavy => HEAVY_ATTACK_DAMAGE,
        }
    }
}

/// Animation/behavior state, one per frame. Dashing is a cooldown flag, not
/// a state: it composes with any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Running,
    Jumping,
    Shielding,
    Attacking(AttackKind),
    Dead,
}

pub struct Player {
    pub body: Body,
    pub health: f32,
    pub lives: u32,
    pub score: u32,
    pub spawn_point: (f32, f32),
    pub state: PlayerState,
    pub is_attacking: bool,
    pub is_shielding: bool,
    pub is_dead: bool,
    pub can_dash: bool,
    pub air_dash_used: bool,
    dash_cooldown: u32,
    death_elapsed_ms: f32,
    pub death_clip: Clip,
    remove: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        let mut body = Body::new(x, y, WIDTH, HEIGHT);
        body.facing = Facing::Right;
        Self {
            body,
            health: MAX_HEALTH,
            lives: STARTING_LIVES,
            score: 0,
            spawn_point: (x, y),
            state: PlayerState::Idle,
            is_attacking: false,
            is_shielding: false,
            is_dead: false,
            can_dash: true,
            air_dash_used: false,
            dash_cooldown: 0,
            death_elapsed_ms: 0.0,
            death_clip: Clip::new(3, 3.0),
            remove: false,
        }
    }

    /// The sword's active area: half the body size, held out in front.
    /// Derived from position and facing every time; never stored.
    pub fn attack_box(&self) -> Rect {
        let w = self.body.width / 2.0;
        let h = self.body.height / 2.0;
        let x = match self.body.facing {
            Facing::Right => self.body.x + self.body.width - w,
            Facing::Left => self.body.x + self.body.width / 2.0 - w,
        };
        let y = self.body.y + self.body.height / 2.0 - h / 2.0;
        Rect::new(x, y, w, h)
    }

    pub fn bounds(&self) -> Rect {
        self.body.rect()
    }

    /// Bank health and clamp at the point of mutation. Attackers go through
    /// this so negative health never leaks into presentation.
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn update(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) -> bool {
        // Death check comes before anything input-driven
        if self.health <= 0.0 && !self.is_dead {
            self.is_dead = true;
            self.state = PlayerState::Dead;
            self.death_clip.reset();
            self.death_elapsed_ms = 0.0;
            ctx.events.cues.send(Cue::PlayerDeath);
        }

        if self.is_dead {
            self.death_clip.advance(TICK_MS * DEATH_TIME_SCALE);
            self.death_elapsed_ms += TICK_MS * DEATH_TIME_SCALE;
            if self.death_elapsed_ms >= self.death_clip.total_ms() {
                self.handle_respawn();
            }
            physics::clamp_to_world(&mut self.body, ctx.stage.width);
            return self.remove;
        }

        self.movement(others, ctx);

        if !self.can_dash {
            self.dash_cooldown = self.dash_cooldown.saturating_sub(1);
            if self.dash_cooldown == 0 {
                self.can_dash = true;
            }
        }

        physics::integrate_gravity(&mut self.body);
        let ride = physics::settle_on_platforms(
            &mut self.body,
            others,
            FootContact::BottomCenter,
            TopBand::HalfHeight,
        );
        if let Some((vx, vy)) = ride {
            // Ride-along: inherit the platform's displacement this frame
            self.body.x += vx;
            self.body.y += vy;
            self.air_dash_used = false;
        }
        physics::block_overhead(&mut self.body, others);
        if physics::clamp_to_floor(&mut self.body, ctx.stage.floor) {
            self.air_dash_used = false;
        }
        physics::clamp_to_world(&mut self.body, ctx.stage.width);

        self.remove
    }

    fn movement(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) {
        let input = ctx.input;

        // The attack box is only live for the cycle that opened it
        self.is_attacking = false;

        if input.right || input.left {
            self.state = PlayerState::Running;
            if input.right {
                self.body.x += SPEED;
                self.body.facing = Facing::Right;
            }
            if input.left {
                self.body.x -= SPEED;
                self.body.facing = Facing::Left;
            }
        } else if self.body.on_ground {
            self.state = PlayerState::Idle;
        }

        if input.restart {
            ctx.events.transitions.send(Transition::Restart);
        }

        if !self.body.on_ground {
            self.state = PlayerState::Jumping;
        }

        if input.jump && self.body.on_ground {
            self.body.velocity_y = -JUMP_STRENGTH;
            self.body.on_ground = false;
            self.air_dash_used = false;
            ctx.events.cues.send(Cue::Jump);
        }

        if input.down {
            self.is_shielding = true;
            self.state = PlayerState::Shielding;
        } else {
            self.is_shielding = false;
        }

        if input.attack_light && self.body.on_ground {
            self.perform_attack(AttackKind::Light, others, ctx);
        }
        if input.attack_heavy && self.body.on_ground {
            self.perform_attack(AttackKind::Heavy, others, ctx);
        }

        // One air dash per airtime; the cooldown gates ground dashes too
        let air_ok = self.body.on_ground || !self.air_dash_used;
        if input.dash && self.can_dash && air_ok {
            if input.right {
                self.body.x += DASH_DISTANCE;
            }
            if input.left {
                self.body.x -= DASH_DISTANCE;
            }
            self.can_dash = false;
            self.dash_cooldown = DASH_COOLDOWN_FRAMES;
            if !self.body.on_ground {
                self.air_dash_used = true;
            }
            ctx.events.cues.send(Cue::Dash);
        }
    }

    /// Open the attack box and resolve damage against every enemy whose
    /// center falls inside it, all within this cycle.
    fn perform_attack(&mut self, kind: AttackKind, others: &mut Vec<Entity>, ctx: &mut Ctx) {
        self.is_attacking = true;
        self.state = PlayerState::Attacking(kind);
        ctx.events.cues.send(Cue::Slash);

        let attack_box = self.attack_box();
        for other in others.iter_mut() {
            let Some(target) = other.as_damageable_mut() else {
                continue;
            };
            if center_half_in_zone(&target.bounds(), &attack_box) {
                target.apply_damage(kind.damage());
            }
        }
    }

    /// Death animation finished: spend a life. With lives left the player
    /// returns to the spawn point at full health; otherwise request
    /// permanent removal (the registry turns that into a level restart).
    fn handle_respawn(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.body.x = self.spawn_point.0;
            self.body.y = self.spawn_point.1;
            self.body.velocity_y = 0.0;
            self.health = MAX_HEALTH;
            self.is_dead = false;
            self.death_elapsed_ms = 0.0;
            self.state = PlayerState::Idle;
        } else {
            self.remove = true;
        }
    }
}
