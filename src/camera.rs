//! Camera / viewport
//!
//! Smoothly tracks the main character within the level boundaries and
//! answers visibility queries so the renderer can skip off-screen entities.
//! The camera is a collaborator of the core loop, not part of it: the
//! registry hands it the player's rect once per frame.

use crate::geom::Rect;

/// Horizontal tracking smoothing factor per frame
const HORIZONTAL_SMOOTHING: f32 = 0.1;
/// Vertical tracking smoothing factor per frame
const VERTICAL_SMOOTHING: f32 = 0.05;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    /// Viewport (screen) size
    pub width: f32,
    pub height: f32,
    /// Level boundaries the camera may scroll to
    pub max_x: f32,
    pub max_y: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            max_x: 0.0,
            max_y: 0.0,
        }
    }

    /// Set the boundaries of the current level. Called on every level load.
    pub fn set_level_boundaries(&mut self, width: f32, height: f32) {
        self.max_x = width.max(0.0);
        self.max_y = height.max(0.0);
    }

    /// Ease toward centering on the target (the main character). A missing
    /// target is a no-op for the frame, never an error.
    pub fn follow(&mut self, target: Option<Rect>) {
        let Some(target) = target else { return };

        let mut target_x = target.center_x() - self.width / 2.0;
        let mut target_y = target.center_y() - self.height / 2.0;

        target_x = target_x.clamp(0.0, self.max_x);
        target_y = target_y.clamp(0.0, self.max_y);

        self.x += (target_x - self.x) * HORIZONTAL_SMOOTHING;
        self.y += (target_y - self.y) * VERTICAL_SMOOTHING;
    }

    /// Does any part of the rect fall inside the viewport?
    pub fn is_visible(&self, rect: &Rect) -> bool {
        rect.right() > self.x
            && rect.x < self.x + self.width
            && rect.bottom() > self.y
            && rect.y < self.y + self.height
    }

    /// Snap to a position (used on level load so the first frame doesn't
    /// sweep across the whole level).
    pub fn jump_to(&mut self, x: f32, y: f32) {
        self.x = x.clamp(0.0, self.max_x);
        self.y = y.clamp(0.0, self.max_y);
    }
}
