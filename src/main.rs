//! SAMURAI RESCUE entry point
//!
//! Window setup and the display-rate loop: sample input, run one
//! simulation frame, drain audio cues, draw. Pass a path to a RON level
//! file to play a single custom level instead of the campaign.

use macroquad::prelude::*;

use samurai_rescue::app::App;
use samurai_rescue::audio::AudioBank;
use samurai_rescue::input::InputState;
use samurai_rescue::level::{data, file, LevelData};
use samurai_rescue::render;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Samurai Rescue v{}", samurai_rescue::VERSION),
        window_width: 1200,
        window_height: 500,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// The campaign, or a single external level named on the command line.
fn load_levels() -> Vec<LevelData> {
    match std::env::args().nth(1) {
        Some(path) => match file::load_level_file(std::path::Path::new(&path)) {
            Ok(level) => {
                println!("Playing custom level: {}", level.name);
                vec![level]
            }
            Err(err) => {
                eprintln!("Could not load {path}: {err}");
                eprintln!("Falling back to the campaign");
                data::campaign()
            }
        },
        None => data::campaign(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let mut audio = AudioBank::load().await;
    let mut app = App::new(load_levels(), screen_width(), screen_height());

    loop {
        let input = InputState::sample();
        app.frame(&input, get_time() * 1000.0);

        for cue in app.events.cues.drain() {
            audio.play(cue);
        }
        app.events.clear_all();

        render::draw(&app);
        next_frame().await
    }
}
