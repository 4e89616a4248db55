//! Level data
//!
//! A level is a declarative record: bounds, start position and placement
//! arrays per entity kind. The simulation treats it as opaque
//! configuration; the assembler turns it into a populated registry.
//! Records serialize with RON so levels can also live in external files.

pub mod assemble;
pub mod data;
pub mod file;
pub mod sequencer;

use serde::{Deserialize, Serialize};

use crate::entity::{Axis, Facing, Stage};

/// A placement position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

pub const fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// A placed rectangle (platforms, walls, the cage).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub const fn rect(x: f32, y: f32, width: f32, height: f32) -> RectSpec {
    RectSpec {
        x,
        y,
        width,
        height,
    }
}

/// An enemy placement with optional facing (defaults to left).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spawn {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub facing: Facing,
}

pub const fn spawn(x: f32, y: f32, facing: Facing) -> Spawn {
    Spawn { x, y, facing }
}

/// A moving platform placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoverSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub range: f32,
    pub axis: Axis,
}

/// A timed on-screen message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_message_size")]
    pub size: f32,
    pub text: String,
    /// On-screen lifetime in seconds
    pub seconds: f32,
    #[serde(default = "default_message_color")]
    pub color: String,
}

fn default_message_size() -> f32 {
    16.0
}

fn default_message_color() -> String {
    "yellow".to_string()
}

/// Everything the assembler needs to build one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    /// Horizontal extent of the level
    pub width: f32,
    /// Visible height; doubles as the fallback floor
    pub height: f32,
    /// How far down the camera may scroll
    #[serde(default)]
    pub camera_max_y: f32,
    /// Index of the background music track
    #[serde(default)]
    pub music_track: usize,
    pub start: Point,
    #[serde(default)]
    pub platforms: Vec<RectSpec>,
    #[serde(default)]
    pub moving_platforms: Vec<MoverSpec>,
    #[serde(default)]
    pub walls: Vec<RectSpec>,
    #[serde(default)]
    pub coins: Vec<Point>,
    #[serde(default)]
    pub melee_enemies: Vec<Spawn>,
    #[serde(default)]
    pub ranged_enemies: Vec<Spawn>,
    #[serde(default)]
    pub boss: Option<Point>,
    #[serde(default)]
    pub spikes: Vec<Point>,
    #[serde(default)]
    pub health_packs: Vec<Point>,
    #[serde(default)]
    pub checkpoints: Vec<Point>,
    #[serde(default)]
    pub companion: Option<Point>,
    #[serde(default)]
    pub cage: Option<RectSpec>,
    #[serde(default)]
    pub flag: Option<Point>,
    #[serde(default)]
    pub messages: Vec<MessageSpec>,
}

impl LevelData {
    /// The stage bounds handed to every entity update.
    pub fn stage(&self) -> Stage {
        Stage {
            width: self.width,
            floor: self.height,
        }
    }
}
