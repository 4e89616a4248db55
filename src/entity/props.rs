//! Interactive props
//!
//! Checkpoint, cage, flag and the transient on-screen message. All of them
//! are stationary; their updates are overlap checks against the player (or
//! the companion, for the cage) plus a latch.

use crate::event::{Cue, Transition};
use crate::geom::{center_in_zone, Rect};

use super::{Ctx, Entity};

pub const CHECKPOINT_SIZE: f32 = 50.0;
pub const FLAG_WIDTH: f32 = 100.0;
pub const FLAG_HEIGHT: f32 = 100.0;

/// Rewrites the player's spawn point while overlapped. Idempotent, and the
/// confirmation cue re-fires on every overlap frame, not just the first
/// contact: standing on a checkpoint keeps chiming.
pub struct Checkpoint {
    pub x: f32,
    pub y: f32,
    pub activated: bool,
}

impl Checkpoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            activated: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, CHECKPOINT_SIZE, CHECKPOINT_SIZE)
    }

    pub fn update(&mut self, others: &mut [Entity], ctx: &mut Ctx) -> bool {
        for other in others.iter_mut() {
            let Some(p) = other.as_player_mut() else {
                continue;
            };
            if center_in_zone(&p.bounds(), &self.rect()) {
                self.activated = true;
                p.spawn_point = (self.x, self.y);
                ctx.events.cues.send(Cue::CheckpointReached);
            }
        }
        false
    }
}

/// Imprisons the companion. While closed and overlapping, the companion
/// cannot move; an attacking player overlapping the cage opens it for good.
/// The cage coordinates with the companion it imprisons by finding it in
/// the sweep; it never owns or removes it.
pub struct Cage {
    pub rect: Rect,
    pub is_open: bool,
}

impl Cage {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            is_open: false,
        }
    }

    pub fn update(&mut self, others: &mut [Entity]) -> bool {
        for other in others.iter() {
            let Some(p) = other.as_player() else {
                continue;
            };
            if !self.is_open && self.rect.overlaps(&p.bounds()) && p.is_attacking {
                self.is_open = true;
                println!("Cage opened!");
            }
        }

        for other in others.iter_mut() {
            let Entity::Companion(companion) = other else {
                continue;
            };
            if self.is_open {
                companion.can_move = true;
            } else if self.rect.overlaps(&companion.body.rect()) {
                companion.can_move = false;
            }
        }

        false
    }
}

/// Level exit. The first overlap requests the advance; the consumed latch
/// guards against a second request while the transition is pending.
pub struct Flag {
    pub x: f32,
    pub y: f32,
    pub consumed: bool,
}

impl Flag {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            consumed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, FLAG_WIDTH, FLAG_HEIGHT)
    }

    pub fn update(&mut self, others: &mut [Entity], ctx: &mut Ctx) -> bool {
        for other in others.iter() {
            let Some(p) = other.as_player() else {
                continue;
            };
            if !self.consumed && center_in_zone(&p.bounds(), &self.rect()) {
                self.consumed = true;
                ctx.events.transitions.send(Transition::Advance);
            }
        }
        false
    }
}

/// On-screen text with a frame-counted lifetime. Never removed, just goes
/// inactive and renders nothing afterwards.
pub struct Message {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
    pub color: String,
    pub frames_left: i32,
    pub active: bool,
}

impl Message {
    pub fn new(x: f32, y: f32, size: f32, text: String, seconds: f32, color: String) -> Self {
        Self {
            x,
            y,
            size,
            text,
            color,
            frames_left: (seconds * 60.0) as i32,
            active: true,
        }
    }

    pub fn update(&mut self) -> bool {
        if self.active {
            self.frames_left -= 1;
            if self.frames_left <= 0 {
                self.active = false;
            }
        }
        false
    }
}
