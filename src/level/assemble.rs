//! Level assembler
//!
//! Turns a `LevelData` record into a populated registry. Insertion order is
//! part of the simulation contract (the sweep runs in it): terrain first,
//! then enemies, then the player and companion, then props and HUD.

use crate::entity::{
    Boss, Cage, Checkpoint, Coin, Companion, Entity, Flag, HealthPack, LivesIndicator,
    MeleeEnemy, Message, MovingPlatform, Platform, Player, RangedEnemy, ScoreCounter, Spike, Wall,
};
use crate::registry::Registry;

use super::LevelData;

/// Build every entity the level describes, in sweep order.
pub fn populate(registry: &mut Registry, data: &LevelData) {
    for p in &data.platforms {
        registry.push(Entity::Platform(Platform::new(p.x, p.y, p.width, p.height)));
    }
    for c in &data.coins {
        registry.push(Entity::Coin(Coin::new(c.x, c.y)));
    }
    for e in &data.melee_enemies {
        registry.push(Entity::Melee(MeleeEnemy::new(e.x, e.y, e.facing)));
    }
    for e in &data.ranged_enemies {
        registry.push(Entity::Ranged(RangedEnemy::new(e.x, e.y, e.facing)));
    }
    if let Some(b) = &data.boss {
        registry.push(Entity::Boss(Boss::new(b.x, b.y)));
    }
    for m in &data.moving_platforms {
        registry.push(Entity::MovingPlatform(MovingPlatform::new(
            m.x, m.y, m.width, m.height, m.speed, m.range, m.axis,
        )));
    }
    for w in &data.walls {
        registry.push(Entity::Wall(Wall::new(w.x, w.y, w.width, w.height)));
    }
    for s in &data.spikes {
        registry.push(Entity::Spike(Spike::new(s.x, s.y)));
    }
    for h in &data.health_packs {
        registry.push(Entity::HealthPack(HealthPack::new(h.x, h.y)));
    }
    for c in &data.checkpoints {
        registry.push(Entity::Checkpoint(Checkpoint::new(c.x, c.y)));
    }

    registry.push(Entity::Player(Player::new(data.start.x, data.start.y)));

    if let Some(g) = &data.companion {
        registry.push(Entity::Companion(Companion::new(g.x, g.y)));
    }
    for m in &data.messages {
        registry.push(Entity::Message(Message::new(
            m.x,
            m.y,
            m.size,
            m.text.clone(),
            m.seconds,
            m.color.clone(),
        )));
    }
    if let Some(c) = &data.cage {
        registry.push(Entity::Cage(Cage::new(c.x, c.y, c.width, c.height)));
    }

    registry.push(Entity::Score(ScoreCounter::new()));
    registry.push(Entity::Lives(LivesIndicator::new()));

    if let Some(f) = &data.flag {
        registry.push(Entity::Flag(Flag::new(f.x, f.y)));
    }
}
