//! Boss (the shinobi)
//!
//! Final opponent. Three nested zones around it: the contact hitbox (melee
//! grind, shield-aware), an attack range that triggers the chase (and the
//! taunt), and a wide shooting range that fires a three-bullet spread on a
//! wall-clock cooldown. Health thresholds only drive the health-bar
//! presentation; behavior does not change with phases. Killing the boss
//! flags every wall in the level for removal, opening the path to the cage.

use crate::animation::Clip;
use crate::event::Cue;
use crate::geom::{center_in_zone, Rect};
use crate::TICK_MS;

use super::physics::{self, FootContact, TopBand};
use super::{Body, Bullet, Ctx, Damageable, Entity, Facing};

pub const WIDTH: f32 = 128.0;
pub const HEIGHT: f32 = 128.0;
pub const MAX_HEALTH: f32 = 2500.0;
const SPEED: f32 = 3.0;
const CONTACT_DAMAGE: f32 = 0.5;
const ATTACK_RANGE_WIDTH: f32 = 300.0;
const ATTACK_RANGE_HEIGHT: f32 = 500.0;
const SHOOTING_RANGE_WIDTH: f32 = 1000.0;
const SHOOTING_RANGE_HEIGHT: f32 = 500.0;
const HITBOX_WIDTH: f32 = 64.0;
/// Wall-clock cooldown between bullet spreads
const SHOT_COOLDOWN_MS: f64 = 300.0;
/// Horizontal offsets of the three-bullet spread
const SPREAD_OFFSETS: [f32; 3] = [0.0, -10.0, 5.0];
const LANDING_BAND: f32 = 10.0;
const DEATH_TIME_SCALE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BossState {
    #[default]
    Idle,
    Chasing,
    Attacking,
    Shooting,
    Dead,
}

pub struct Boss {
    pub body: Body,
    pub health: f32,
    pub state: BossState,
    pub is_taking_damage: bool,
    pub is_dead: bool,
    last_shot_ms: f64,
    death_elapsed_ms: f32,
    pub death_clip: Clip,
}

impl Boss {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, WIDTH, HEIGHT),
            health: MAX_HEALTH,
            state: BossState::Idle,
            is_taking_damage: false,
            is_dead: false,
            last_shot_ms: 0.0,
            death_elapsed_ms: 0.0,
            death_clip: Clip::new(5, 5.0),
        }
    }

    pub fn hitbox(&self) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x + self.body.width - HITBOX_WIDTH,
            Facing::Left => self.body.x - HITBOX_WIDTH / 2.0,
        };
        let y = self.body.y + self.body.height / 2.0;
        Rect::new(x, y, HITBOX_WIDTH, 0.0)
    }

    /// The inner zone: close enough to close the distance on foot.
    pub fn attack_range(&self) -> Rect {
        self.zone(ATTACK_RANGE_WIDTH, ATTACK_RANGE_HEIGHT)
    }

    /// The outer zone: close enough to shoot at.
    pub fn shooting_range(&self) -> Rect {
        self.zone(SHOOTING_RANGE_WIDTH, SHOOTING_RANGE_HEIGHT)
    }

    fn zone(&self, width: f32, height: f32) -> Rect {
        let x = match self.body.facing {
            Facing::Right => self.body.x,
            Facing::Left => self.body.x - width / 2.0 - self.body.width,
        };
        Rect::new(x, self.body.y, width, height)
    }

    pub fn update(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) -> bool {
        // A dead boss unblocks the path: every wall goes
        if self.health <= 0.0 {
            for other in others.iter_mut() {
                if let Entity::Wall(wall) = other {
                    wall.remove = true;
                }
            }
        }

        if self.health <= 0.0 && !self.is_dead {
            self.is_dead = true;
            self.state = BossState::Dead;
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
            FootContact::FullWidth,
            TopBand::Pixels(LANDING_BAND),
        );
        physics::clamp_to_floor(&mut self.body, ctx.stage.floor);

        self.engage_player(others, ctx);

        false
    }

    /// Zone priority: hitbox > attack range (chase + taunt) > shooting
    /// range (spread fire) > idle. The boss always turns toward the player
    /// first.
    fn engage_player(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) {
        let mut spread_from = None;

        for other in others.iter_mut() {
            let Some(player) = other.as_player_mut() else {
                continue;
            };
            let player_rect = player.bounds();
            self.body.facing = Facing::toward(self.body.x, player_rect.x);

            if center_in_zone(&player_rect, &self.hitbox()) {
                if !player.is_shielding {
                    self.state = BossState::Attacking;
                    player.take_damage(CONTACT_DAMAGE);
                }
            } else if self.in_zone(&player_rect, &self.attack_range()) {
                ctx.events.cues.send(Cue::BossLaugh);
                self.body.x += SPEED * self.body.facing.sign();
                self.state = BossState::Chasing;
            } else if self.in_zone(&player_rect, &self.shooting_range()) {
                if ctx.now_ms - self.last_shot_ms >= SHOT_COOLDOWN_MS {
                    self.state = BossState::Shooting;
                    spread_from = Some(self.bullet_origin());
                    self.last_shot_ms = ctx.now_ms;
                }
            } else {
                self.state = BossState::Idle;
            }
        }

        if let Some((x, y)) = spread_from {
            for offset in SPREAD_OFFSETS {
                others.push(Entity::Bullet(Bullet::new(x + offset, y, self.body.facing)));
            }
            ctx.events.cues.send(Cue::Shot);
        }
    }

    fn bullet_origin(&self) -> (f32, f32) {
        let x = match self.body.facing {
            Facing::Right => self.body.x + self.body.width / 2.0,
            Facing::Left => self.body.x - 10.0,
        };
        (x, self.body.y + self.body.height / 2.0)
    }

    /// Player center column inside the zone, whole body inside its
    /// vertical window.
    fn in_zone(&self, player: &Rect, zone: &Rect) -> bool {
        player.center_x() > zone.x
            && player.x < zone.right()
            && player.bottom() > zone.y
            && player.bottom() < zone.bottom()
    }
}

impl Damageable for Boss {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::entity::{Player, Wall};
    use crate::event::Events;
    use crate::input::InputState;
    use crate::Stage;

    fn ctx_at<'a>(
        input: &'a InputState,
        camera: &'a Camera,
        events: &'a mut Events,
        now_ms: f64,
    ) -> Ctx<'a> {
        Ctx {
            input,
            camera,
            stage: Stage {
                width: 3000.0,
                floor: 680.0,
            },
            events,
            now_ms,
        }
    }

    #[test]
    fn test_contact_grind_half_damage() {
        let mut boss = Boss::new(100.0, 552.0);
        // Facing flips toward the player each frame; player to the right,
        // center column on the hitbox line
        let mut player = Player::new(boss.body.x + 30.0, 552.0);
        player.health = 10.0;
        let mut others = vec![Entity::Player(player)];
        let input = InputState::default();
        let camera = Camera::new(800.0, 680.0);
        let mut events = Events::new();
        boss.update(&mut others, &mut ctx_at(&input, &camera, &mut events, 0.0));

        let Entity::Player(player) = &others[0] else {
            panic!()
        };
        assert_eq!(player.health, 9.5);
        assert_eq!(boss.state, BossState::Attacking);
    }

    #[test]
    fn test_spread_fires_three_bullets_on_cooldown() {
        let mut boss = Boss::new(100.0, 552.0);
        let player = Player::new(boss.body.x + 700.0, 552.0);
        let mut others = vec![Entity::Player(player)];
        let input = InputState::default();
        let camera = Camera::new(800.0, 680.0);
        let mut events = Events::new();

        boss.update(&mut others, &mut ctx_at(&input, &camera, &mut events, 1000.0));
        let bullets = others
            .iter()
            .filter(|e| matches!(e, Entity::Bullet(_)))
            .count();
        assert_eq!(bullets, 3);
        assert_eq!(boss.state, BossState::Shooting);

        // 100ms later: still cooling down, no new bullets
        boss.update(&mut others, &mut ctx_at(&input, &camera, &mut events, 1100.0));
        let bullets = others
            .iter()
            .filter(|e| matches!(e, Entity::Bullet(_)))
            .count();
        assert_eq!(bullets, 3);
    }

    #[test]
    fn test_chase_in_attack_range_taunts() {
        let mut boss = Boss::new(100.0, 552.0);
        let player = Player::new(boss.body.x + 250.0, 552.0);
        let mut others = vec![Entity::Player(player)];
        let input = InputState::default();
        let camera = Camera::new(800.0, 680.0);
        let mut events = Events::new();
        let x_before = boss.body.x;
        boss.update(&mut others, &mut ctx_at(&input, &camera, &mut events, 0.0));
        assert_eq!(boss.state, BossState::Chasing);
        assert_eq!(boss.body.x, x_before + SPEED);
        assert!(events.cues.iter().any(|c| *c == Cue::BossLaugh));
    }

    #[test]
    fn test_death_flags_walls_for_removal() {
        let mut boss = Boss::new(100.0, 552.0);
        boss.health = 0.0;
        let mut others = vec![Entity::Wall(Wall::new(500.0, 0.0, 50.0, 300.0))];
        let input = InputState::default();
        let camera = Camera::new(800.0, 680.0);
        let mut events = Events::new();
        boss.update(&mut others, &mut ctx_at(&input, &camera, &mut events, 0.0));

        let Entity::Wall(wall) = &others[0] else {
            panic!()
        };
        assert!(wall.remove);
        assert!(boss.is_dead);
    }

    #[test]
    fn test_dead_boss_runs_out_removal_timer() {
        let mut boss = Boss::new(100.0, 552.0);
        boss.health = 0.0;
        let input = InputState::default();
        let camera = Camera::new(800.0, 680.0);
        let mut events = Events::new();
        let mut others = Vec::new();

        let mut removed = false;
        let mut frames = 0;
        while !removed && frames < 40 {
            removed = boss.update(&mut others, &mut ctx_at(&input, &camera, &mut events, 0.0));
            frames += 1;
        }
        // 1000ms of corpse at 4x tick: ~15 frames
        assert!(removed);
        assert!((12..=18).contains(&frames));
    }
}
