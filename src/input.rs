//! Input snapshot
//!
//! Entities never read the keyboard directly: the frame driver samples the
//! key state once at the top of every update pass and hands the same
//! snapshot to every entity. Tests build the snapshot by hand.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

/// Pressed-state of every key the game cares about, sampled fresh each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Arrow down: shield
    pub down: bool,
    /// Space: jump
    pub jump: bool,
    /// X: light attack
    pub attack_light: bool,
    /// C: heavy attack (also resumes from pause)
    pub attack_heavy: bool,
    /// Z: dash
    pub dash: bool,
    /// R: restart the current level
    pub restart: bool,
    /// P pauses, C resumes (edge-triggered)
    pub pause_pressed: bool,
    pub resume_pressed: bool,
}

impl InputState {
    /// Sample the live keyboard. Only called from the frame driver; the
    /// rest of the game sees the returned snapshot.
    pub fn sample() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            down: is_key_down(KeyCode::Down),
            jump: is_key_down(KeyCode::Space),
            attack_light: is_key_down(KeyCode::X),
            attack_heavy: is_key_down(KeyCode::C),
            dash: is_key_down(KeyCode::Z),
            restart: is_key_down(KeyCode::R),
            pause_pressed: is_key_pressed(KeyCode::P),
            resume_pressed: is_key_pressed(KeyCode::C),
        }
    }
}
