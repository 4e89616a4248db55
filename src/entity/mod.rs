//! Entities
//!
//! The game is a fixed roster of known kinds, so the entity type is a
//! closed enum rather than trait objects or runtime type checks. Behavior
//! lives in one module per kind; cross-kind interaction goes through the
//! narrow accessors below (`surface`, `as_damageable_mut`, `as_player_mut`,
//! ...) instead of open field access.
//!
//! Update contract: `update(&mut self, others, ctx) -> bool`, where `true`
//! requests removal from the registry at the end of the sweep. While an
//! entity updates it is swapped out of the live list and a `Vacant` hole
//! stands in for it; every scan skips holes.

pub mod physics;
pub mod player;
pub mod companion;
pub mod melee;
pub mod ranged;
pub mod boss;
pub mod bullet;
pub mod platform;
pub mod wall;
pub mod hazard;
pub mod pickup;
pub mod props;
pub mod hud;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::event::Events;
use crate::geom::Rect;
use crate::input::InputState;

pub use boss::Boss;
pub use bullet::Bullet;
pub use companion::Companion;
pub use hazard::Spike;
pub use hud::{LivesIndicator, ScoreCounter};
pub use melee::MeleeEnemy;
pub use pickup::{Coin, HealthPack};
pub use platform::{Axis, MovingPlatform, Platform};
pub use player::Player;
pub use props::{Cage, Checkpoint, Flag, Message};
pub use ranged::RangedEnemy;
pub use wall::Wall;

/// Horizontal facing. Also the direction bullets travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// The facing that looks from `from` toward `to`.
    pub fn toward(from: f32, to: f32) -> Self {
        if to > from {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

/// Shared physical state for every mobile kind. Static props keep a plain
/// `Rect` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub facing: Facing,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            velocity_y: 0.0,
            on_ground: false,
            facing: Facing::Left,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The horizontal bounds and visible floor of the current level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stage {
    /// Level width; entities are clamped to `[0, width - entity.width]`
    pub width: f32,
    /// The level's visual height. Fallback floor when nothing else catches
    /// a falling entity.
    pub floor: f32,
}

/// Everything an entity may touch during its update besides the other
/// entities: the input snapshot, the camera (read-only, for HUD
/// positioning), the stage bounds, the frame's event queues and the real
/// clock for the two wall-clock cooldowns.
pub struct Ctx<'a> {
    pub input: &'a InputState,
    pub camera: &'a Camera,
    pub stage: Stage,
    pub events: &'a mut Events,
    pub now_ms: f64,
}

/// A standable surface: its rect plus the velocity it applied this frame,
/// so riders can translate by the same delta.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub rect: Rect,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

/// Anything an attack can hurt. Damage also raises the taking-damage flag
/// that drives the target's hurt reaction; a dead target ignores further
/// damage.
pub trait Damageable {
    fn bounds(&self) -> Rect;
    fn apply_damage(&mut self, amount: f32);
    fn is_dead(&self) -> bool;
}

/// The closed set of entity kinds.
pub enum Entity {
    Player(Player),
    Companion(Companion),
    Melee(MeleeEnemy),
    Ranged(RangedEnemy),
    Boss(Boss),
    Bullet(Bullet),
    Platform(Platform),
    MovingPlatform(MovingPlatform),
    Wall(Wall),
    Spike(Spike),
    HealthPack(HealthPack),
    Coin(Coin),
    Checkpoint(Checkpoint),
    Cage(Cage),
    Flag(Flag),
    Message(Message),
    Score(ScoreCounter),
    Lives(LivesIndicator),
    /// Hole left in the list while its occupant runs its update.
    Vacant,
}

impl Entity {
    /// Advance one simulation tick. Returns true to request removal.
    pub fn update(&mut self, others: &mut Vec<Entity>, ctx: &mut Ctx) -> bool {
        match self {
            Entity::Player(p) => p.update(others, ctx),
            Entity::Companion(c) => c.update(others, ctx),
            Entity::Melee(m) => m.update(others, ctx),
            Entity::Ranged(r) => r.update(others, ctx),
            Entity::Boss(b) => b.update(others, ctx),
            Entity::Bullet(b) => b.update(others),
            Entity::Platform(_) => false,
            Entity::MovingPlatform(m) => m.update(),
            Entity::Wall(w) => w.update(others),
            Entity::Spike(s) => s.update(others),
            Entity::HealthPack(h) => h.update(others, ctx),
            Entity::Coin(c) => c.update(others, ctx),
            Entity::Checkpoint(c) => c.update(others, ctx),
            Entity::Cage(c) => c.update(others),
            Entity::Flag(f) => f.update(others, ctx),
            Entity::Message(m) => m.update(),
            Entity::Score(s) => s.update(others, ctx),
            Entity::Lives(l) => l.update(others, ctx),
            Entity::Vacant => false,
        }
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Player(p) => p.body.rect(),
            Entity::Companion(c) => c.body.rect(),
            Entity::Melee(m) => m.body.rect(),
            Entity::Ranged(r) => r.body.rect(),
            Entity::Boss(b) => b.body.rect(),
            Entity::Bullet(b) => b.rect(),
            Entity::Platform(p) => p.rect,
            Entity::MovingPlatform(m) => m.rect,
            Entity::Wall(w) => w.rect,
            Entity::Spike(s) => s.rect(),
            Entity::HealthPack(h) => h.rect(),
            Entity::Coin(c) => c.rect(),
            Entity::Checkpoint(c) => c.rect(),
            Entity::Cage(c) => c.rect,
            Entity::Flag(f) => f.rect(),
            Entity::Message(m) => Rect::new(m.x, m.y, 0.0, 0.0),
            Entity::Score(s) => Rect::new(s.x, s.y, 40.0, 40.0),
            Entity::Lives(l) => Rect::new(l.x, l.y, 50.0, 50.0),
            Entity::Vacant => Rect::default(),
        }
    }

    /// Platforms (static or moving) expose a standable surface.
    pub fn surface(&self) -> Option<Surface> {
        match self {
            Entity::Platform(p) => Some(Surface {
                rect: p.rect,
                velocity_x: 0.0,
                velocity_y: 0.0,
            }),
            Entity::MovingPlatform(m) => Some(Surface {
                rect: m.rect,
                velocity_x: m.velocity_x,
                velocity_y: m.velocity_y,
            }),
            _ => None,
        }
    }

    /// Enemy kinds the player's sword (and bullets' friendly fire rules)
    /// care about.
    pub fn as_damageable_mut(&mut self) -> Option<&mut dyn Damageable> {
        match self {
            Entity::Melee(m) => Some(m),
            Entity::Ranged(r) => Some(r),
            Entity::Boss(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Entity::Player(p) => Some(p),
            _ => None,
        }
    }

    /// Walls block these kinds; everything else passes through.
    pub fn apply_wall_block(&mut self, wall_rect: &Rect) {
        match self {
            Entity::Player(p) => {
                if wall::block_horizontal(wall_rect, &mut p.body) {
                    p.can_dash = false;
                }
            }
            Entity::Melee(m) => {
                wall::block_horizontal(wall_rect, &mut m.body);
            }
            Entity::Ranged(r) => {
                wall::block_horizontal(wall_rect, &mut r.body);
            }
            Entity::Bullet(b) => {
                wall::block_bullet(wall_rect, b);
            }
            _ => {}
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, Entity::Vacant)
    }
}
