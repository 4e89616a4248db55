//! Platforms
//!
//! Static pads are pure collision geometry. Moving pads oscillate along a
//! single axis between their start and `start + range`, and publish the
//! velocity they applied each frame so anything standing on them can ride
//! along.

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Which way a moving platform travels. `Fixed` movers are placed with the
/// mover machinery but never actually move (levels use them as styled
/// static pads).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    Fixed,
}

/// A static pad.
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// A pad oscillating between `start` and `start + range` along one axis.
pub struct MovingPlatform {
    pub rect: Rect,
    pub axis: Axis,
    pub speed: f32,
    pub range: f32,
    /// Coordinate (on the movement axis) the oscillation started from
    start: f32,
    moving_forward: bool,
    /// Displacement applied this frame, read by riders
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl MovingPlatform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32, range: f32, axis: Axis) -> Self {
        let start = match axis {
            Axis::Horizontal | Axis::Fixed => x,
            Axis::Vertical => y,
        };
        Self {
            rect: Rect::new(x, y, width, height),
            axis,
            speed,
            range,
            start,
            moving_forward: true,
            velocity_x: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;

        match self.axis {
            Axis::Horizontal => {
                if self.moving_forward {
                    self.rect.x += self.speed;
                    self.velocity_x = self.speed;
                    if self.rect.x >= self.start + self.range {
                        self.moving_forward = false;
                    }
                } else {
                    self.rect.x -= self.speed;
                    self.velocity_x = -self.speed;
                    if self.rect.x <= self.start {
                        self.moving_forward = true;
                    }
                }
            }
            Axis::Vertical => {
                if self.moving_forward {
                    self.rect.y += self.speed;
                    self.velocity_y = self.speed;
                    if self.rect.y >= self.start + self.range {
                        self.moving_forward = false;
                    }
                } else {
                    self.rect.y -= self.speed;
                    self.velocity_y = -self.speed;
                    if self.rect.y <= self.start {
                        self.moving_forward = true;
                    }
                }
            }
            Axis::Fixed => {}
        }

        false
    }
}
