//! Frame driver
//!
//! Glues the registry, sequencer, camera and event queues into the
//! fixed-rate loop: apply any pending level transition, run one update
//! sweep, follow the player with the camera, then collect this frame's
//! transition requests for the next frame. Rendering and audio stay
//! outside; `main` drains the cue queue after each frame.

use crate::camera::Camera;
use crate::entity::Ctx;
use crate::event::{Cue, Events, Transition};
use crate::input::InputState;
use crate::level::{assemble, sequencer::Sequencer, LevelData};
use crate::registry::Registry;

pub struct App {
    pub registry: Registry,
    pub sequencer: Sequencer,
    pub camera: Camera,
    pub events: Events,
    pub paused: bool,
    /// Transition collected last frame, applied before the next sweep
    pending: Option<Transition>,
}

impl App {
    pub fn new(levels: Vec<LevelData>, screen_width: f32, screen_height: f32) -> Self {
        let mut app = Self {
            registry: Registry::new(),
            sequencer: Sequencer::new(levels),
            camera: Camera::new(screen_width, screen_height),
            events: Events::new(),
            paused: false,
            pending: None,
        };
        app.load_current();
        app
    }

    /// Rebuild the registry from the active level. The one place entities
    /// are created.
    fn load_current(&mut self) {
        self.registry.clear();
        let Some(data) = self.sequencer.current() else {
            return;
        };
        let data = data.clone();
        assemble::populate(&mut self.registry, &data);
        self.camera
            .set_level_boundaries(data.width, data.camera_max_y);
        self.camera.jump_to(data.start.x, 0.0);
        self.events.cues.send(Cue::LevelMusic(data.music_track));
    }

    /// One simulation frame.
    pub fn frame(&mut self, input: &InputState, now_ms: f64) {
        // A pending transition replaces the entity set before any update
        if let Some(transition) = self.pending.take() {
            match transition {
                Transition::Advance => self.sequencer.advance(),
                Transition::Restart => self.sequencer.restart(),
            }
            if self.sequencer.is_complete() {
                self.registry.clear();
            } else {
                self.paused = false;
                self.load_current();
            }
        }

        if input.pause_pressed {
            self.paused = true;
        }
        if input.resume_pressed {
            self.paused = false;
        }
        // Paused or finished: the loop keeps scheduling, entities don't run
        if self.paused || self.sequencer.is_complete() {
            return;
        }

        let stage = match self.sequencer.current() {
            Some(data) => data.stage(),
            None => return,
        };

        let App {
            registry,
            camera,
            events,
            ..
        } = self;
        let mut ctx = Ctx {
            input,
            camera,
            stage,
            events,
            now_ms,
        };
        let player_removed = registry.update(&mut ctx);
        if player_removed {
            // Lives exhausted: the whole level resets
            self.events.transitions.send(Transition::Restart);
        }

        let target = self.registry.main_character().map(|p| p.bounds());
        self.camera.follow(target);

        // First transition request wins; the rest of the frame's requests
        // are redundant by construction (latched flags upstream)
        for transition in self.events.transitions.drain() {
            if self.pending.is_none() {
                self.pending = Some(transition);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::data::campaign;
    use crate::TICK_MS;

    fn drive(app: &mut App, frames: usize) {
        let input = InputState::default();
        let mut now = 0.0;
        for _ in 0..frames {
            app.frame(&input, now);
            app.events.clear_all();
            now += TICK_MS as f64;
        }
    }

    #[test]
    fn test_new_app_loads_first_level() {
        let app = App::new(campaign(), 1200.0, 500.0);
        assert!(app.registry.main_character().is_some());
        assert_eq!(app.sequencer.index(), 0);
        // Music cue for the first level queued
        assert_eq!(app.events.cues.len(), 1);
    }

    #[test]
    fn test_pause_freezes_entities() {
        let mut app = App::new(campaign(), 1200.0, 500.0);
        drive(&mut app, 5);

        let pause = InputState {
            pause_pressed: true,
            ..Default::default()
        };
        app.frame(&pause, 0.0);
        let y_at_pause = app.registry.main_character().unwrap().body.y;
        drive(&mut app, 10);
        assert_eq!(app.registry.main_character().unwrap().body.y, y_at_pause);
        assert!(app.paused);

        let resume = InputState {
            resume_pressed: true,
            ..Default::default()
        };
        app.frame(&resume, 0.0);
        assert!(!app.paused);
    }

    #[test]
    fn test_restart_transition_rebuilds_level() {
        let mut app = App::new(campaign(), 1200.0, 500.0);
        drive(&mut app, 3);
        let count_before = app.registry.len();
        app.events.transitions.send(Transition::Restart);
        let input = InputState::default();
        app.frame(&input, 0.0); // collects the transition
        app.frame(&input, 0.0); // applies it before updating
        assert_eq!(app.sequencer.index(), 0);
        assert!(app.registry.len() >= count_before.saturating_sub(5));
        assert!(app.registry.main_character().is_some());
    }

    #[test]
    fn test_advance_transition_moves_to_next_level() {
        let mut app = App::new(campaign(), 1200.0, 500.0);
        app.events.transitions.send(Transition::Advance);
        let input = InputState::default();
        app.frame(&input, 0.0);
        app.frame(&input, 0.0);
        assert_eq!(app.sequencer.index(), 1);
        assert!(app.registry.main_character().is_some());
    }

    #[test]
    fn test_campaign_completion_clears_and_halts() {
        // A one-level campaign: advancing out of it completes the run
        let levels = vec![campaign().remove(6)];
        let mut app = App::new(levels, 1200.0, 500.0);
        app.events.transitions.send(Transition::Advance);
        let input = InputState::default();
        app.frame(&input, 0.0);
        app.frame(&input, 0.0);
        assert!(app.sequencer.is_complete());
        assert!(app.registry.is_empty());
        // Further frames are no-ops
        app.frame(&input, 0.0);
        assert!(app.registry.is_empty());
    }
}
