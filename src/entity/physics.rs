//! Shared movement physics
//!
//! Gravity, platform landing, overhead blocking and world clamps. Landing
//! uses deliberately slack top bands so entities don't lose ground contact
//! at 60 updates a second; the band width and the horizontal footprint test
//! differ per kind and are passed in by the caller.

use super::{Body, Entity};

/// Downward acceleration per tick
pub const GRAVITY: f32 = 0.8;
/// Hard lower bound of the world; nothing falls past this depth
pub const WORLD_DEPTH: f32 = 3000.0;

/// Which horizontal footprint must intersect a platform for a landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootContact {
    /// The bottom-center point must be over the platform (player, companion)
    BottomCenter,
    /// Center past the left edge, left edge before the right (ground enemies)
    CenterPastLeft,
    /// Any horizontal overlap (boss)
    FullWidth,
}

/// How far below a platform's top a landing still counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopBand {
    /// Within the platform's upper half
    HalfHeight,
    /// Within a fixed number of pixels of the top
    Pixels(f32),
}

/// Accumulate gravity into vertical velocity and integrate position.
pub fn integrate_gravity(body: &mut Body) {
    body.velocity_y += GRAVITY;
    body.y += body.velocity_y;
}

/// Try to land on any platform in the list. On a hit the body is snapped to
/// the platform top, grounded, and its fall stopped. Returns the velocity of
/// the surface landed on so riders can translate along (ride-along); `None`
/// when airborne.
pub fn settle_on_platforms(
    body: &mut Body,
    others: &[Entity],
    contact: FootContact,
    band: TopBand,
) -> Option<(f32, f32)> {
    body.on_ground = false;
    let mut ride = None;

    for other in others {
        let Some(surface) = other.surface() else {
            continue;
        };
        let plat = surface.rect;

        let over_platform = match contact {
            FootContact::BottomCenter => {
                let cx = body.center_x();
                cx > plat.x && cx < plat.right()
            }
            FootContact::CenterPastLeft => body.center_x() > plat.x && body.x < plat.right(),
            FootContact::FullWidth => body.x + body.width > plat.x && body.x < plat.right(),
        };
        if !over_platform {
            continue;
        }

        let band_bottom = match band {
            TopBand::HalfHeight => plat.y + plat.h / 2.0,
            TopBand::Pixels(px) => plat.y + px,
        };
        if body.bottom() >= plat.y && body.bottom() <= band_bottom && body.velocity_y >= 0.0 {
            body.y = plat.y - body.height;
            body.on_ground = true;
            body.velocity_y = 0.0;
            ride = Some((surface.velocity_x, surface.velocity_y));
        }
    }

    ride
}

/// Rising into a platform's underside pushes the body back below it and
/// kills the upward velocity (player and companion only).
pub fn block_overhead(body: &mut Body, others: &[Entity]) {
    if body.velocity_y >= 0.0 {
        return;
    }
    for other in others {
        let Some(surface) = other.surface() else {
            continue;
        };
        let plat = surface.rect;
        let cx = body.center_x();
        let mid = body.y + body.height / 2.0;
        if cx > plat.x && cx < plat.right() && mid < plat.bottom() && mid > plat.y {
            body.y = plat.bottom();
            body.velocity_y = 0.0;
        }
    }
}

/// Fallback floor at the level's visual height. Returns true if the body
/// came to rest on it this tick.
pub fn clamp_to_floor(body: &mut Body, floor: f32) -> bool {
    if body.y >= floor - body.height {
        body.y = floor - body.height;
        body.on_ground = true;
        body.velocity_y = 0.0;
        true
    } else {
        false
    }
}

/// Constrain to the level's horizontal bounds and the world depth.
pub fn clamp_to_world(body: &mut Body, level_width: f32) {
    body.x = body.x.clamp(0.0, (level_width - body.width).max(0.0));
    body.y = body.y.clamp(0.0, WORLD_DEPTH - body.height);
}
