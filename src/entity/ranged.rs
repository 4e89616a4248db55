//! Ranged enemy (the gunman)
//!
//! Stationary shooter. Tracks the player inside its shooting range, spaces
//! shots on the wall clock, and after emptying a magazine goes into a
//! reload state that blocks firing until the reload timer runs out. Never
//! chases.

use crate::animation::Clip;
use crate::event::Cue;
use crate::geom::Rect;
use crate::TICK_MS;

use super::physics::{self, FootContact, TopBand};
use super::{Body, Bullet, Ctx, Damageable, Entity, Facing};

pub const WIDTH: f32 = 128.0;
pub const HEIGHT: f32 = 128.0;
pub const MAX_HEALTH: f32 = 200.0;
/// Horizontal reach of the shooting range
const SHOOTING_RANGE: f32 = 300.0;
/// Wall-clock spacing between shots
const SHOT_SPACING_MS: f64 = 500.0;
/// Shots before a forced reload
const SHOT_LIMIT: u32 = 5;
/// Reload duration, frame-counted
const RELOAD_TIME_MS: f32 = 2500.0;
const LANDING_BAND: f32 = 10.0;
const DEATH_TIME_SCALE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangedState {
    #[default]
    Idle,
    Shooting,
    Reloading,
    Hurt,
    Dead,
}

pub struct RangedEnemy {
    pub body: Body,
    pub health: f32,
    pub state: RangedState,
    pub is_taking_damage: bool,
    pub is_dead: bool,
    pub shots_fired: u32,
    pub is_reloading: bool,
    reload_timer_ms: f32,
    last_shot_ms: f64,
    death_elapsed_ms: f32,
    pub death_clip: Clip,
}

impl RangedEnemy {
    pub fn new(x: f32, y: f32, facing: Facing) -> Self {
        let mut body = Body::new(x, y, WIDTH, HEIGHT);
        body.facing = facing;
        Self {
            body,
            health: MAX_HEALTH,
            state: RangedState::Idle,
            is_taking_damage: false,
            is_dead: false,
            shots_fired: 0,
            is_reloading: false,
            reload_timer_ms: 0.0,
            last_shot_ms: 0.0,
            death_elapsed_ms: 0.0,
            death_clip: Clip::new(5, 5.0),
        }
    }

    /// The zone that triggers firing, extended in front of the gunman at
    /// body height.
    pub fn shooting_range(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x,
            Facing::Left => self.body.x - SHOOTING_RANGE / 2.0 - self.body.width,
        };
        Rect::new(x, self.body.y, SHOOTING_RANGE, self.body.height)
    }

    pub fn update(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) -> bool {
        if self.health <= 0.0 && !self.is_dead {
            self.is_dead = true;
            self.state = RangedState::Dead;
            self.death_clip.reset();
            self.death_elapsed_ms = 0.0;
        }

        if self.is_dead {
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

        self.engage_player(others, ctx);

        if self.is_reloading {
            self.reload_timer_ms += TICK_MS;
            self.state = RangedState::Reloading;
            if self.reload_timer_ms >= RELOAD_TIME_MS {
                self.is_reloading = false;
                self.reload_timer_ms = 0.0;
                self.shots_fired = 0;
                self.state = RangedState::Idle;
            }
        }

        if self.is_taking_damage {
            self.state = RangedState::Hurt;
            ctx.events.cues.send(Cue::EnemyHurt);
            self.is_taking_damage = false;
        }

        false
    }

    /// Every player in range gets aimed at and (cooldowns permitting) shot.
    /// Out of range the gunman just idles; it scans the whole list either
    /// way rather than bailing on the first miss.
    fn engage_player(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) {
        let mut target_x = None;
        for other in others.iter() {
            let Some(player) = other.as_player() else {
                continue;
            };
            if self.in_shooting_range(&player.bounds()) {
                target_x = Some(player.body.x);
            }
        }

        match target_x {
            Some(x) => {
                self.body.facing = Facing::toward(self.body.x, x);
                self.try_shoot(others, ctx);
            }
            None => {
                if !self.is_reloading {
                    self.state = RangedState::Idle;
                }
            }
        }
    }

    /// Player center column inside the range, bottom below the range top,
    /// mid above its bottom.
    fn in_shooting_range(&self, player: &Rect) -> bool {
        let range = self.shooting_range();
        player.center_x() > range.x
            && player.center_x() < range.right()
            && player.bottom() > range.y
            && player.y + player.h / 2.0 < range.bottom()
    }

    fn try_shoot(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) {
        if self.is_reloading {
            return;
        }
        if ctx.now_ms - self.last_shot_ms <= SHOT_SPACING_MS {
            return;
        }

        self.state = RangedState::Shooting;
        let x = match self.body.facing {
            Facing::Right => self.body.x + self.body.width / 2.0,
            Facing::Left => self.body.x - 10.0,
        };
        let y = self.body.y + self.body.height / 1.5;
        others.push(Entity::Bullet(Bullet::new(x, y, self.body.facing)));
        ctx.events.cues.send(Cue::Shot);

        self.shots_fired += 1;
        self.last_shot_ms = ctx.now_ms;
        if self.shots_fired > SHOT_LIMIT {
            self.shots_fired = 0;
            self.is_reloading = true;
            self.reload_timer_ms = 0.0;
        }
    }
}

impl Damageable for RangedEnemy {
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
