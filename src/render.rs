//! Placeholder renderer
//!
//! Drawing is a thin collaborator of the simulation, not part of it: every
//! entity knows how to render itself against the camera, and the driver
//! skips anything outside the viewport. Sprites are flat-color shapes so
//! the game is playable without a single asset on disk; swapping in
//! textures only touches this module.

use macroquad::prelude::*;

use crate::app::App;
use crate::entity::hud::{boss_health_level, player_health_level, HealthLevel};
use crate::entity::{player, Entity};
use crate::camera::Camera as GameCamera;

fn bar_color(level: HealthLevel) -> Color {
    match level {
        HealthLevel::Full => GREEN,
        HealthLevel::Good => LIME,
        HealthLevel::Medium => YELLOW,
        HealthLevel::Medium2 => GOLD,
        HealthLevel::Low => ORANGE,
        HealthLevel::Low2 => RED,
        HealthLevel::Critical => MAROON,
    }
}

fn message_color(name: &str) -> Color {
    match name {
        "yellow" => YELLOW,
        "white" => WHITE,
        "red" => RED,
        "green" => GREEN,
        _ => WHITE,
    }
}

impl Entity {
    /// Draw this entity in screen space. Only called when the camera's
    /// visibility test passed.
    pub fn render(&self, camera: &GameCamera) {
        let bounds = self.bounds();
        let x = bounds.x - camera.x;
        let y = bounds.y - camera.y;

        match self {
            Entity::Player(p) => {
                let color = if p.is_dead {
                    DARKGRAY
                } else if p.is_shielding {
                    SKYBLUE
                } else {
                    WHITE
                };
                draw_rectangle(x, y, bounds.w, bounds.h, color);
                if p.is_attacking {
                    let swing = p.attack_box();
                    draw_rectangle_lines(swing.x - camera.x, swing.y - camera.y, swing.w, swing.h, 2.0, YELLOW);
                }
                // Health bar above the head
                let level = player_health_level(p.health);
                let fill = (p.health / player::MAX_HEALTH).clamp(0.0, 1.0);
                draw_rectangle(x - 10.0, y + 20.0, 110.0 * fill, 7.0, bar_color(level));
            }
            Entity::Companion(c) => {
                let color = if c.can_move { PINK } else { Color::new(0.8, 0.5, 0.6, 0.7) };
                draw_rectangle(x, y, bounds.w, bounds.h, color);
            }
            Entity::Melee(m) => {
                draw_rectangle(x, y, bounds.w, bounds.h, if m.is_dead { DARKGRAY } else { RED });
            }
            Entity::Ranged(r) => {
                draw_rectangle(x, y, bounds.w, bounds.h, if r.is_dead { DARKGRAY } else { ORANGE });
            }
            Entity::Boss(b) => {
                draw_rectangle(x, y, bounds.w, bounds.h, if b.is_dead { DARKGRAY } else { PURPLE });
                let level = boss_health_level(b.health);
                draw_rectangle(x, y - 10.0, 110.0, 10.0, bar_color(level));
            }
            Entity::Bullet(_) => {
                draw_rectangle(x, y, bounds.w, bounds.h, RED);
            }
            Entity::Platform(_) => {
                draw_rectangle(x, y, bounds.w, bounds.h, GRAY);
            }
            Entity::MovingPlatform(_) => {
                draw_rectangle(x, y, bounds.w, bounds.h, DARKGRAY);
            }
            Entity::Wall(_) => {
                draw_rectangle(x, y, bounds.w, bounds.h, BROWN);
            }
            Entity::Spike(_) => {
                draw_triangle(
                    vec2(x, y + bounds.h),
                    vec2(x + bounds.w, y + bounds.h),
                    vec2(x + bounds.w / 2.0, y),
                    LIGHTGRAY,
                );
            }
            Entity::HealthPack(h) => {
                if !h.picked_up {
                    draw_rectangle(x, y, bounds.w, bounds.h, GREEN);
                }
            }
            Entity::Coin(c) => {
                if !c.picked_up {
                    draw_circle(x + bounds.w / 2.0, y + bounds.h / 2.0, bounds.w / 2.0, GOLD);
                }
            }
            Entity::Checkpoint(c) => {
                let color = if c.activated { SKYBLUE } else { BLUE };
                draw_rectangle(x, y, bounds.w, bounds.h, color);
            }
            Entity::Cage(c) => {
                if !c.is_open {
                    draw_rectangle_lines(x, y, bounds.w, bounds.h, 4.0, BEIGE);
                }
            }
            Entity::Flag(_) => {
                draw_rectangle(x, y, bounds.w, bounds.h, DARKGREEN);
            }
            Entity::Message(m) => {
                if m.active {
                    draw_text(&m.text, x, y - 5.0, m.size, message_color(&m.color));
                }
            }
            Entity::Score(s) => {
                draw_text(&format!("x{}", s.value), x + 30.0, y + 20.0, 30.0, YELLOW);
            }
            Entity::Lives(l) => {
                draw_text(&format!("lives {}", l.lives), x, y + 20.0, 30.0, WHITE);
            }
            Entity::Vacant => {}
        }
    }
}

/// Draw one frame: background, visible entities, overlays.
pub fn draw(app: &App) {
    clear_background(Color::new(0.08, 0.08, 0.12, 1.0));

    for entity in app.registry.entities() {
        if app.camera.is_visible(&entity.bounds()) {
            entity.render(&app.camera);
        }
    }

    if app.paused {
        draw_text("PAUSED - press C to resume", 40.0, 60.0, 40.0, WHITE);
    }
    if app.sequencer.is_complete() {
        draw_text("Campaign complete!", 40.0, 60.0, 40.0, YELLOW);
    }
}
