//! Crease entry point
//!
//! Initializes logging, configuration and the high-score store, then runs
//! a short headless demo of the simulation. Windowed play plugs a
//! renderer/input frontend into `sim::tick` at a fixed 60 Hz; the sim
//! itself never draws or polls devices.

use std::path::Path;

use glam::Vec2;

use crease::consts::TICKS_PER_SECOND;
use crease::highscores::HighScoreStore;
use crease::settings::Settings;
use crease::sim::{GameEvent, GamePhase, GameState, SimConfig, TickInput, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Some(Path::new("settings.json")));
    log::info!(
        "starting {}: {}x{} window, ball every {}s",
        settings.window_title,
        settings.window_width,
        settings.window_height,
        settings.ball_spawn_secs
    );

    let mut store = match HighScoreStore::open(&settings.data_dir, &settings.score_filename) {
        Ok(store) => {
            log::info!("{}", store.display_text("high score: "));
            Some(store)
        }
        Err(err) => {
            log::warn!("high score persistence unavailable: {err}");
            None
        }
    };

    let high_score = store
        .as_ref()
        .map(|s| s.record().clone())
        .unwrap_or_default();
    let mut state = GameState::new(SimConfig::from(&settings), high_score, settings.seed);

    // Headless demo: sweep the pointer back and forth for thirty seconds
    // of simulated play, or until the round ends.
    let mut input = TickInput::default();
    for tick_index in 0..(30 * TICKS_PER_SECOND) {
        let t = tick_index as f32 / TICKS_PER_SECOND as f32;
        input.pointer = Vec2::new(200.0 + 150.0 * (t * 2.0).sin(), 500.0);

        tick(&mut state, &input);
        for event in state.take_events() {
            handle_event(&mut store, event);
        }

        if state.phase != GamePhase::Playing {
            log::info!("{}", state.user_message);
            break;
        }
    }

    log::info!("demo finished with score {}", state.score);
}

/// Log sim events and delegate high-score updates to the store
fn handle_event(store: &mut Option<HighScoreStore>, event: GameEvent) {
    match event {
        GameEvent::BallSpawned { position, velocity } => {
            log::debug!("ball bowled from {position} at {velocity} px/tick");
        }
        GameEvent::BallHit { score } => log::info!("ball struck, score {score}"),
        GameEvent::BallLost => log::debug!("ball left play"),
        GameEvent::Bowled { score } => log::info!("bowled out at {score}"),
        GameEvent::HitWicket { score } => log::info!("hit wicket at {score}"),
        GameEvent::GameReset => log::info!("new round"),
        GameEvent::HighScoreRecorded { score, name } => {
            if let Some(store) = store {
                if let Err(err) = store.set_high_score(score, name) {
                    log::warn!("failed to save high score: {err}");
                }
            }
        }
    }
}
