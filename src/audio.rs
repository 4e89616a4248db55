//! Audio bank
//!
//! Maps audio cues to loaded sounds. Sound files that fail to load leave a
//! hole in the bank: the cue is dropped silently after a single warning at
//! startup. The simulation never waits on audio.

use std::collections::HashMap;

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

use crate::event::Cue;

/// Relative paths for each one-shot cue. Level music is separate.
const CUE_FILES: &[(Cue, &str)] = &[
    (Cue::Jump, "assets/sounds/jump.ogg"),
    (Cue::Dash, "assets/sounds/dash.ogg"),
    (Cue::Slash, "assets/sounds/slash.ogg"),
    (Cue::PlayerDeath, "assets/sounds/player_death.ogg"),
    (Cue::EnemyHurt, "assets/sounds/enemy_hurt.ogg"),
    (Cue::Shot, "assets/sounds/shot.ogg"),
    (Cue::BossLaugh, "assets/sounds/boss_laugh.ogg"),
    (Cue::CheckpointReached, "assets/sounds/checkpoint.ogg"),
    (Cue::HealthPickup, "assets/sounds/health_pickup.ogg"),
    (Cue::CoinPickup, "assets/sounds/coin.ogg"),
];

/// Looping background tracks, indexed by level number.
const MUSIC_FILES: &[&str] = &[
    "assets/sounds/music/tutorial.ogg",
    "assets/sounds/music/camp.ogg",
    "assets/sounds/music/level1.ogg",
    "assets/sounds/music/level2.ogg",
    "assets/sounds/music/bossfight.ogg",
    "assets/sounds/music/level3.ogg",
    "assets/sounds/music/epilogue.ogg",
];

pub struct AudioBank {
    sounds: HashMap<Cue, Sound>,
    music: Vec<Option<Sound>>,
    current_music: Option<Sound>,
}

impl AudioBank {
    /// Load every known sound. Missing files are warned about once and
    /// skipped; the game plays fine silent.
    pub async fn load() -> Self {
        let mut sounds = HashMap::new();
        for &(cue, path) in CUE_FILES {
            match load_sound(path).await {
                Ok(sound) => {
                    sounds.insert(cue, sound);
                }
                Err(err) => eprintln!("audio: could not load {path}: {err}"),
            }
        }

        let mut music = Vec::new();
        for path in MUSIC_FILES {
            match load_sound(path).await {
                Ok(sound) => music.push(Some(sound)),
                Err(err) => {
                    eprintln!("audio: could not load {path}: {err}");
                    music.push(None);
                }
            }
        }

        Self {
            sounds,
            music,
            current_music: None,
        }
    }

    /// Fire a one-shot cue, or switch background music for a music cue.
    pub fn play(&mut self, cue: Cue) {
        match cue {
            Cue::LevelMusic(index) => self.play_music(index),
            _ => {
                if let Some(sound) = self.sounds.get(&cue) {
                    play_sound(
                        sound,
                        PlaySoundParams {
                            looped: false,
                            volume: 0.5,
                        },
                    );
                }
            }
        }
    }

    /// Stop the previous track and loop the new one.
    fn play_music(&mut self, index: usize) {
        if let Some(current) = self.current_music.take() {
            stop_sound(&current);
        }
        if let Some(Some(sound)) = self.music.get(index) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: 0.2,
                },
            );
            self.current_music = Some(sound.clone());
        }
    }
}
