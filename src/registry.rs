//! Entity registry
//!
//! Owns the live entity set for the current level and runs the per-frame
//! sweep. Entities update in insertion order against the live list, not a
//! snapshot: damage dealt early in the sweep is visible to later entities
//! the same frame, and anything spawned mid-sweep (bullets) both is visible
//! and gets its own update before the frame ends.
//!
//! While an entity runs it is swapped out of its slot and a `Vacant` hole
//! takes its place, so it can freely mutate every *other* entity. A `true`
//! return requests removal: the slot keeps its hole and the sweep's
//! compaction pass drops it.

use crate::entity::{Ctx, Entity, Player};

pub struct Registry {
    entities: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Drop every entity. Only level transitions call this.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }

    /// One update sweep. Returns true if the player signalled permanent
    /// removal this frame (lives exhausted); the driver turns that into a
    /// level restart.
    pub fn update(&mut self, ctx: &mut Ctx) -> bool {
        let mut player_removed = false;

        let mut i = 0;
        // Length re-checked every pass: mid-sweep spawns run this frame too
        while i < self.entities.len() {
            let mut entity = std::mem::replace(&mut self.entities[i], Entity::Vacant);
            let remove = entity.update(&mut self.entities, ctx);
            if remove {
                if matches!(entity, Entity::Player(_)) {
                    player_removed = true;
                }
            } else {
                self.entities[i] = entity;
            }
            i += 1;
        }

        self.entities.retain(|entity| !entity.is_vacant());
        player_removed
    }

    /// Locate the main character (single pass). Camera and HUD collaborate
    /// through this; a missing player is a valid transient state.
    pub fn main_character(&self) -> Option<&Player> {
        self.entities.iter().find_map(|entity| entity.as_player())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::entity::{Facing, MeleeEnemy, Message, Platform, RangedEnemy, Stage};
    use crate::event::Events;
    use crate::input::InputState;

    fn run_frame(registry: &mut Registry, now_ms: f64) -> bool {
        let input = InputState::default();
        let camera = Camera::new(800.0, 500.0);
        let mut events = Events::new();
        let mut ctx = Ctx {
            input: &input,
            camera: &camera,
            stage: Stage {
                width: 5000.0,
                floor: 500.0,
            },
            events: &mut events,
            now_ms,
        };
        registry.update(&mut ctx)
    }

    #[test]
    fn test_sweep_retains_live_and_drops_removed() {
        let mut registry = Registry::new();
        registry.push(Entity::Platform(Platform::new(0.0, 400.0, 500.0, 50.0)));
        // A message with a single frame of life removes nothing; a dead
        // enemy past its timer does get dropped
        registry.push(Entity::Message(Message::new(
            0.0,
            0.0,
            16.0,
            "hi".into(),
            1.0,
            "yellow".into(),
        )));
        let mut corpse = MeleeEnemy::new(100.0, 372.0, Facing::Left);
        corpse.health = 0.0;
        registry.push(Entity::Melee(corpse));

        assert_eq!(registry.len(), 3);
        // Run long enough for the death timer (2000ms at 4x tick)
        for _ in 0..40 {
            run_frame(&mut registry, 0.0);
        }
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_mid_sweep_spawn_updates_same_frame() {
        let mut registry = Registry::new();
        // Gunman with a player in range spawns a bullet mid-sweep; the
        // bullet must move this same frame
        let gunman = RangedEnemy::new(100.0, 372.0, Facing::Right);
        registry.push(Entity::Ranged(gunman));
        registry.push(Entity::Player(crate::entity::Player::new(250.0, 372.0)));

        run_frame(&mut registry, 10_000.0);

        let bullet = registry
            .entities()
            .iter()
            .find_map(|e| match e {
                Entity::Bullet(b) => Some(b),
                _ => None,
            })
            .expect("bullet spawned");
        // Spawn x is gunman.x + width/2 = 164; one update moved it by 7
        assert_eq!(bullet.x, 171.0);
    }

    #[test]
    fn test_main_character_lookup() {
        let mut registry = Registry::new();
        assert!(registry.main_character().is_none());
        registry.push(Entity::Player(crate::entity::Player::new(50.0, 60.0)));
        assert!(registry.main_character().is_some());
    }

    #[test]
    fn test_player_removal_reported() {
        let mut registry = Registry::new();
        let mut player = crate::entity::Player::new(0.0, 372.0);
        player.lives = 1;
        player.health = 0.0;
        registry.push(Entity::Player(player));

        let mut reported = false;
        for _ in 0..60 {
            if run_frame(&mut registry, 0.0) {
                reported = true;
                break;
            }
        }
        assert!(reported);
        assert!(registry.main_character().is_none());
    }
}
