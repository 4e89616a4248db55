//! The campaign
//!
//! Seven hand-authored levels: a scripted intro gauntlet, the camp
//! tutorial, two traversal levels, the boss fight, a horde run and the
//! epilogue. Pure data; tweak freely.

use crate::entity::{Axis, Facing};

use super::{point, rect, spawn, LevelData, MessageSpec, MoverSpec, Point};

/// A row of spikes spaced one spike-width apart.
fn spike_row(x0: f32, y: f32, count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| point(x0 + i as f32 * 50.0, y))
        .collect()
}

fn msg(x: f32, y: f32, text: &str, seconds: f32) -> MessageSpec {
    MessageSpec {
        x,
        y,
        size: 16.0,
        text: text.to_string(),
        seconds,
        color: "yellow".to_string(),
    }
}

fn mover(x: f32, y: f32, width: f32, height: f32, speed: f32, range: f32, axis: Axis) -> MoverSpec {
    MoverSpec {
        x,
        y,
        width,
        height,
        speed,
        range,
        axis,
    }
}

fn empty_level(name: &str, width: f32, height: f32) -> LevelData {
    LevelData {
        name: name.to_string(),
        width,
        height,
        camera_max_y: 0.0,
        music_track: 0,
        start: point(0.0, 0.0),
        platforms: Vec::new(),
        moving_platforms: Vec::new(),
        walls: Vec::new(),
        coins: Vec::new(),
        melee_enemies: Vec::new(),
        ranged_enemies: Vec::new(),
        boss: None,
        spikes: Vec::new(),
        health_packs: Vec::new(),
        checkpoints: Vec::new(),
        companion: None,
        cage: None,
        flag: None,
        messages: Vec::new(),
    }
}

/// Scripted intro: learn to move, dodge spikes, meet both enemy kinds.
fn intro() -> LevelData {
    LevelData {
        music_track: 0,
        flag: Some(point(3700.0, 350.0)),
        coins: vec![point(2700.0, 400.0)],
        melee_enemies: vec![spawn(3000.0, 400.0, Facing::Left)],
        ranged_enemies: vec![spawn(1400.0, 250.0, Facing::Left)],
        moving_platforms: vec![
            mover(2000.0, 400.0, 100.0, 50.0, 3.0, 250.0, Axis::Fixed),
            mover(2400.0, 400.0, 100.0, 50.0, 3.0, 250.0, Axis::Fixed),
        ],
        spikes: spike_row(2000.0, 450.0, 8),
        checkpoints: vec![point(1500.0, 400.0)],
        health_packs: vec![point(3120.0, 350.0)],
        messages: vec![
            msg(250.0, 250.0, "Your companion was taken by the shinobi boss", 60.0),
            msg(500.0, 500.0, "Arrow keys to move, arrow down to shield", 30.0),
            msg(1200.0, 300.0, "C or X to attack", 40.0),
            msg(1500.0, 300.0, "Checkpoint!!", 40.0),
            msg(2000.0, 300.0, "Space to jump", 40.0),
            msg(2100.0, 150.0, "Beware of spikes", 40.0),
            msg(2100.0, 200.0, "They cost a life, but they don't end the run", 40.0),
            msg(2000.0, 230.0, "Far pad? Dash in the air with arrow+Z", 40.0),
            msg(2650.0, 280.0, "That's a reward!!", 40.0),
            msg(3100.0, 280.0, "Heal up!!", 40.0),
            msg(3500.0, 280.0, "Grab the flag to move to the camp", 40.0),
        ],
        camera_max_y: 1200.0,
        ..empty_level("intro", 5000.0, 500.0)
    }
}

/// The camp: a compact sandbox with one of everything.
fn camp() -> LevelData {
    LevelData {
        music_track: 1,
        start: point(100.0, 300.0),
        flag: Some(point(500.0, 50.0)),
        coins: vec![point(300.0, 380.0), point(400.0, 380.0), point(500.0, 380.0)],
        melee_enemies: vec![spawn(1100.0, 200.0, Facing::Left)],
        ranged_enemies: vec![spawn(650.0, 0.0, Facing::Left)],
        moving_platforms: vec![
            mover(900.0, 200.0, 100.0, 50.0, 3.0, 250.0, Axis::Vertical),
            mover(500.0, 150.0, 400.0, 50.0, 3.0, 250.0, Axis::Fixed),
        ],
        walls: vec![rect(700.0, 400.0, 50.0, 100.0)],
        spikes: vec![point(900.0, 480.0), point(950.0, 480.0), point(600.0, 130.0)],
        checkpoints: vec![point(800.0, 100.0)],
        health_packs: vec![point(800.0, 100.0)],
        messages: vec![msg(100.0, 100.0, "Camp", 40.0)],
        ..empty_level("camp", 3000.0, 500.0)
    }
}

/// First real level: a long spike gauntlet over moving pads.
fn level_one() -> LevelData {
    LevelData {
        music_track: 2,
        flag: Some(point(7000.0, 350.0)),
        walls: vec![
            rect(3575.0, 250.0, 50.0, 250.0),
            rect(4000.0, 0.0, 50.0, 350.0),
            rect(5000.0, 150.0, 50.0, 350.0),
            rect(6300.0, 0.0, 50.0, 350.0),
            rect(5950.0, 150.0, 50.0, 150.0),
        ],
        coins: vec![
            point(300.0, 400.0),
            point(500.0, 350.0),
            point(700.0, 300.0),
            point(900.0, 250.0),
            point(1250.0, 200.0),
            point(1500.0, 200.0),
            point(1700.0, 150.0),
            point(2000.0, 100.0),
            point(50.0, 450.0),
            point(100.0, 400.0),
            point(200.0, 400.0),
            point(5000.0, 400.0),
            point(5400.0, 400.0),
            point(5800.0, 400.0),
            point(6400.0, 350.0),
            point(6800.0, 300.0),
            point(7000.0, 250.0),
        ],
        melee_enemies: vec![
            spawn(5000.0, 480.0, Facing::Right),
            spawn(5400.0, 480.0, Facing::Right),
            spawn(5500.0, 480.0, Facing::Right),
            spawn(5600.0, 20.0, Facing::Left),
        ],
        ranged_enemies: vec![
            spawn(1700.0, 0.0, Facing::Left),
            spawn(3599.0, 480.0, Facing::Right),
            spawn(3800.0, 480.0, Facing::Left),
            spawn(4500.0, 0.0, Facing::Left),
            spawn(4000.0, 20.0, Facing::Right),
            spawn(5300.0, 20.0, Facing::Left),
            spawn(6200.0, 20.0, Facing::Left),
        ],
        moving_platforms: vec![
            mover(0.0, 250.0, 150.0, 20.0, 3.0, 250.0, Axis::Fixed),
            mover(300.0, 470.0, 100.0, 50.0, 4.0, 300.0, Axis::Horizontal),
            mover(100.0, 470.0, 100.0, 50.0, 3.0, 400.0, Axis::Horizontal),
            mover(900.0, 350.0, 100.0, 50.0, 3.0, 400.0, Axis::Fixed),
            mover(1250.0, 200.0, 100.0, 50.0, 5.0, 400.0, Axis::Vertical),
            mover(1500.0, 200.0, 500.0, 50.0, 5.0, 400.0, Axis::Fixed),
            mover(2200.0, 450.0, 100.0, 50.0, 5.0, 400.0, Axis::Horizontal),
            mover(1910.0, 450.0, 100.0, 50.0, 6.0, 320.0, Axis::Horizontal),
            mover(2700.0, 350.0, 100.0, 50.0, 6.0, 320.0, Axis::Fixed),
            mover(2980.0, 350.0, 50.0, 50.0, 6.0, 320.0, Axis::Fixed),
            mover(3200.0, 350.0, 50.0, 50.0, 6.0, 320.0, Axis::Fixed),
            mover(3420.0, 350.0, 50.0, 50.0, 6.0, 320.0, Axis::Fixed),
            mover(4000.0, 350.0, 600.0, 20.0, 6.0, 320.0, Axis::Fixed),
            mover(3600.0, 450.0, 50.0, 50.0, 10.0, 1000.0, Axis::Horizontal),
            mover(4800.0, 250.0, 100.0, 50.0, 10.0, 1000.0, Axis::Fixed),
            mover(5000.0, 150.0, 1000.0, 50.0, 10.0, 1000.0, Axis::Fixed),
            mover(6100.0, 150.0, 200.0, 50.0, 10.0, 1000.0, Axis::Fixed),
            mover(6000.0, 150.0, 100.0, 50.0, 11.0, 400.0, Axis::Vertical),
            mover(5000.0, 400.0, 100.0, 50.0, 10.0, 1100.0, Axis::Horizontal),
            mover(5400.0, 350.0, 300.0, 50.0, 30.0, 1100.0, Axis::Vertical),
            mover(6200.0, 450.0, 100.0, 50.0, 5.0, 1000.0, Axis::Horizontal),
        ],
        spikes: [
            spike_row(0.0, 480.0, 72),
            spike_row(4000.0, 480.0, 20),
            spike_row(6000.0, 480.0, 9),
        ]
        .concat(),
        checkpoints: vec![point(1900.0, 0.0), point(3650.0, 200.0)],
        health_packs: vec![point(6200.0, 50.0)],
        messages: vec![msg(100.0, 100.0, "Level 1", 40.0)],
        ..empty_level("level-1", 7400.0, 500.0)
    }
}

/// Second level: vertical walls and tighter mover timing.
fn level_two() -> LevelData {
    LevelData {
        music_track: 3,
        start: point(100.0, 300.0),
        flag: Some(point(7200.0, 100.0)),
        walls: vec![
            rect(300.0, 250.0, 50.0, 250.0),
            rect(900.0, 200.0, 30.0, 400.0),
            rect(1650.0, 200.0, 50.0, 500.0),
            rect(1850.0, 100.0, 20.0, 280.0),
            rect(1970.0, 0.0, 50.0, 50.0),
            rect(2450.0, 250.0, 50.0, 250.0),
            rect(3300.0, 200.0, 50.0, 300.0),
            rect(4050.0, 150.0, 50.0, 340.0),
        ],
        coins: vec![
            point(400.0, 150.0),
            point(600.0, 200.0),
            point(800.0, 120.0),
            point(1000.0, 250.0),
            point(1800.0, 400.0),
            point(2000.0, 50.0),
            point(2500.0, 350.0),
            point(3000.0, 180.0),
            point(3500.0, 300.0),
            point(4000.0, 150.0),
            point(4500.0, 150.0),
            point(5000.0, 100.0),
            point(5500.0, 200.0),
            point(5800.0, 300.0),
            point(6100.0, 250.0),
            point(6600.0, 250.0),
            point(7000.0, 100.0),
            point(450.0, 200.0),
            point(950.0, 300.0),
            point(1300.0, 250.0),
            point(2200.0, 310.0),
            point(1960.0, 125.0),
        ],
        melee_enemies: vec![
            spawn(2350.0, 250.0, Facing::Left),
            spawn(1200.0, 400.0, Facing::Left),
            spawn(4500.0, 250.0, Facing::Left),
            spawn(5500.0, 100.0, Facing::Left),
            spawn(5600.0, 100.0, Facing::Left),
        ],
        ranged_enemies: vec![
            spawn(790.0, 0.0, Facing::Left),
            spawn(1900.0, 300.0, Facing::Left),
            spawn(2000.0, 399.0, Facing::Left),
            spawn(2300.0, 100.0, Facing::Left),
            spawn(3000.0, 200.0, Facing::Left),
            spawn(3200.0, 200.0, Facing::Left),
            spawn(4200.0, 0.0, Facing::Left),
            spawn(5000.0, 250.0, Facing::Left),
            spawn(5200.0, 100.0, Facing::Left),
            spawn(5400.0, 0.0, Facing::Left),
        ],
        moving_platforms: vec![
            mover(0.0, 250.0, 100.0, 50.0, 3.0, 250.0, Axis::Vertical),
            mover(350.0, 250.0, 100.0, 50.0, 3.0, 250.0, Axis::Horizontal),
            mover(800.0, 150.0, 100.0, 50.0, 2.0, 100.0, Axis::Vertical),
            mover(930.0, 350.0, 100.0, 50.0, 2.0, 100.0, Axis::Fixed),
            mover(1200.0, 250.0, 100.0, 50.0, 4.0, 300.0, Axis::Horizontal),
            mover(1550.0, 300.0, 100.0, 50.0, 4.0, 300.0, Axis::Vertical),
            mover(1700.0, 300.0, 100.0, 50.0, 5.0, 100.0, Axis::Fixed),
            mover(1850.0, 380.0, 500.0, 30.0, 2.0, 100.0, Axis::Fixed),
            mover(2350.0, 380.0, 100.0, 30.0, 2.0, 100.0, Axis::Vertical),
            mover(1870.0, 180.0, 100.0, 50.0, 5.0, 190.0, Axis::Vertical),
            mover(1970.0, 220.0, 478.0, 30.0, 2.0, 100.0, Axis::Fixed),
            mover(3000.0, 200.0, 300.0, 30.0, 5.0, 400.0, Axis::Vertical),
            mover(3350.0, 450.0, 80.0, 80.0, 5.0, 400.0, Axis::Horizontal),
            mover(4000.0, 350.0, 100.0, 50.0, 5.0, 400.0, Axis::Fixed),
            mover(3550.0, 250.0, 100.0, 50.0, 2.0, 300.0, Axis::Horizontal),
            mover(4100.0, 150.0, 300.0, 50.0, 3.0, 300.0, Axis::Fixed),
            mover(5200.0, 400.0, 100.0, 50.0, 5.0, 100.0, Axis::Vertical),
            mover(5400.0, 350.0, 100.0, 30.0, 8.0, 100.0, Axis::Vertical),
            mover(5600.0, 350.0, 200.0, 30.0, 5.0, 400.0, Axis::Horizontal),
            mover(6250.0, 350.0, 100.0, 30.0, 6.0, 600.0, Axis::Horizontal),
            mover(6900.0, 250.0, 100.0, 50.0, 0.0, 2.0, Axis::Fixed),
            mover(7200.0, 200.0, 100.0, 50.0, 0.0, 2.0, Axis::Fixed),
        ],
        spikes: [
            spike_row(350.0, 480.0, 11),
            spike_row(1350.0, 480.0, 7),
            vec![
                point(2300.0, 360.0),
                point(2250.0, 360.0),
                point(1870.0, 360.0),
                point(1920.0, 360.0),
                point(1970.0, 200.0),
            ],
            spike_row(3350.0, 470.0, 14),
            vec![point(4300.0, 130.0)],
            spike_row(5500.0, 480.0, 37),
        ]
        .concat(),
        checkpoints: vec![point(2250.0, 100.0), point(1110.0, 400.0)],
        health_packs: vec![point(1740.0, 270.0), point(2500.0, 100.0), point(4500.0, 250.0)],
        messages: vec![msg(100.0, 100.0, "Level 2", 40.0)],
        ..empty_level("level-2", 7400.0, 680.0)
    }
}

/// The boss arena. The caged companion waits behind a wall only the boss's
/// death removes.
fn boss_fight() -> LevelData {
    LevelData {
        music_track: 4,
        boss: Some(point(2000.0, 200.0)),
        companion: Some(point(2800.0, 400.0)),
        cage: Some(rect(2800.0, 390.0, 100.0, 110.0)),
        flag: Some(point(2800.0, 240.0)),
        moving_platforms: vec![
            mover(0.0, 250.0, 100.0, 50.0, 0.0, 0.0, Axis::Fixed),
            mover(200.0, 250.0, 730.0, 50.0, 0.0, 0.0, Axis::Fixed),
            mover(100.0, 240.0, 100.0, 50.0, 3.0, 350.0, Axis::Vertical),
            mover(930.0, 300.0, 70.0, 50.0, 3.0, 240.0, Axis::Vertical),
            mover(0.0, 450.0, 100.0, 50.0, 8.0, 420.0, Axis::Horizontal),
            mover(1200.0, 0.0, 100.0, 50.0, 8.0, 420.0, Axis::Vertical),
        ],
        walls: vec![
            rect(1000.0, 0.0, 50.0, 300.0),
            rect(450.0, 0.0, 50.0, 250.0),
            rect(450.0, 400.0, 50.0, 100.0),
            rect(2600.0, 0.0, 50.0, 500.0),
        ],
        spikes: [spike_row(0.0, 480.0, 9), vec![point(950.0, 480.0)]].concat(),
        ranged_enemies: vec![
            spawn(540.0, 0.0, Facing::Right),
            spawn(890.0, 200.0, Facing::Left),
            spawn(450.0, 200.0, Facing::Right),
            spawn(300.0, 0.0, Facing::Left),
            spawn(2300.0, 0.0, Facing::Left),
        ],
        health_packs: vec![point(540.0, 150.0), point(1230.0, 150.0)],
        checkpoints: vec![point(1000.0, 400.0)],
        messages: vec![msg(100.0, 100.0, "Boss fight", 40.0)],
        ..empty_level("boss-fight", 3000.0, 680.0)
    }
}

/// Post-boss horde run with the freed companion fighting alongside.
fn level_three() -> LevelData {
    LevelData {
        music_track: 5,
        start: point(300.0, 380.0),
        companion: Some(point(200.0, 200.0)),
        flag: Some(point(9800.0, 250.0)),
        melee_enemies: vec![
            spawn(800.0, 100.0, Facing::Left),
            spawn(1000.0, 100.0, Facing::Left),
            spawn(1200.0, 100.0, Facing::Left),
            spawn(1500.0, 200.0, Facing::Left),
            spawn(1700.0, 200.0, Facing::Left),
            spawn(2000.0, 200.0, Facing::Left),
            spawn(2300.0, 100.0, Facing::Left),
            spawn(2600.0, 100.0, Facing::Left),
            spawn(2900.0, 100.0, Facing::Left),
            spawn(3200.0, 100.0, Facing::Left),
            spawn(3500.0, 200.0, Facing::Left),
            spawn(3800.0, 200.0, Facing::Left),
        ],
        ranged_enemies: (0..27)
            .map(|i| spawn(1600.0 + i as f32 * 220.0, if i % 2 == 0 { 100.0 } else { 200.0 }, Facing::Left))
            .collect(),
        health_packs: vec![
            point(1100.0, 400.0),
            point(1600.0, 400.0),
            point(2200.0, 400.0),
            point(2700.0, 400.0),
            point(3000.0, 400.0),
            point(3500.0, 400.0),
        ],
        coins: (0..20).map(|i| point(500.0 + i as f32 * 230.0, 400.0)).collect(),
        messages: vec![msg(100.0, 100.0, "Level 3", 40.0)],
        ..empty_level("level-3", 12000.0, 500.0)
    }
}

/// Victory screen. Just the pair of them and a message; no flag, so the
/// sequencer never advances out of it.
fn epilogue() -> LevelData {
    LevelData {
        music_track: 6,
        start: point(300.0, 380.0),
        companion: Some(point(200.0, 300.0)),
        messages: vec![msg(
            200.0,
            250.0,
            "YOU WON - your companion is safe, thanks for playing!",
            40.0,
        )],
        ..empty_level("epilogue", 1200.0, 500.0)
    }
}

/// The full ordered campaign.
pub fn campaign() -> Vec<LevelData> {
    vec![
        intro(),
        camp(),
        level_one(),
        level_two(),
        boss_fight(),
        level_three(),
        epilogue(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_order_and_count() {
        let levels = campaign();
        assert_eq!(levels.len(), 7);
        assert_eq!(levels[0].name, "intro");
        assert_eq!(levels[4].name, "boss-fight");
        assert_eq!(levels[6].name, "epilogue");
    }

    #[test]
    fn test_boss_level_has_the_rescue_setup() {
        let boss = campaign().remove(4);
        assert!(boss.boss.is_some());
        assert!(boss.companion.is_some());
        assert!(boss.cage.is_some());
        assert!(!boss.walls.is_empty());
    }

    #[test]
    fn test_spike_row_spacing() {
        let row = spike_row(100.0, 480.0, 3);
        assert_eq!(row.len(), 3);
        assert_eq!(row[1].x, 150.0);
        assert_eq!(row[2].x, 200.0);
    }
}
