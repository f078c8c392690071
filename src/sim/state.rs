//! Game state, spawn timing and the observability event queue

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::bat::Bat;
use super::stumps::Stumps;
use crate::consts::TICKS_PER_SECOND;
use crate::highscores::HighScore;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active play
    Playing,
    /// Round ended, waiting for a restart
    GameOver,
    /// Round ended on a new best score, capturing the player's name
    NameInput,
}

/// Terminal outcome banners
pub const MESSAGE_HIT_WICKET: &str = "HIT WICKET!";
pub const MESSAGE_BOWLED: &str = "BOWLED!";

/// Structured events emitted by the sim for the driver to log or act on.
/// Draining is optional; gameplay never depends on it.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BallSpawned { position: Vec2, velocity: Vec2 },
    BallHit { score: u32 },
    BallLost,
    Bowled { score: u32 },
    HitWicket { score: u32 },
    HighScoreRecorded { score: u32, name: String },
    GameReset,
}

/// Pure per-tick spawn cadence accumulator.
///
/// Fires at most once per tick; time past the interval is discarded rather
/// than queued.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    elapsed_ticks: u32,
    interval_ticks: u32,
}

impl SpawnTimer {
    pub fn new(interval_ticks: u32) -> Self {
        Self {
            elapsed_ticks: 0,
            interval_ticks: interval_ticks.max(1),
        }
    }

    pub fn from_secs(secs: u32) -> Self {
        Self::new(secs * TICKS_PER_SECOND)
    }

    /// Advance one tick; true when the interval has elapsed
    pub fn tick(&mut self) -> bool {
        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.interval_ticks {
            self.elapsed_ticks = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }
}

/// Screen and cadence values fixed for the session
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Seconds between bowled balls
    pub ball_spawn_secs: u32,
}

impl From<&Settings> for SimConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            screen_width: settings.window_width,
            screen_height: settings.window_height,
            ball_spawn_secs: settings.ball_spawn_secs,
        }
    }
}

/// Complete game state for one running game
#[derive(Debug)]
pub struct GameState {
    pub config: SimConfig,
    pub phase: GamePhase,
    pub score: u32,
    pub bat: Bat,
    pub balls: Vec<Ball>,
    pub stumps: Stumps,
    pub spawn_timer: SpawnTimer,
    /// Terminal outcome banner for the game-over screen
    pub user_message: String,
    /// Name entry buffer while in `NameInput`
    pub name_input: String,
    /// In-memory best-score record; the driver persists updates
    pub high_score: HighScore,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(config: SimConfig, high_score: HighScore, seed: u64) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            bat: Bat::new(),
            balls: Vec::new(),
            stumps: Stumps::new(config.screen_height),
            spawn_timer: SpawnTimer::from_secs(config.ball_spawn_secs),
            user_message: String::new(),
            name_input: String::new(),
            high_score,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// Pure comparison against the in-memory record
    pub fn is_new_high_score(&self) -> bool {
        self.score > self.high_score.score
    }

    /// Drain events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reinitialize for a fresh round. The best-score record survives.
    pub fn reset(&mut self) {
        self.bat = Bat::new();
        self.balls.clear();
        self.stumps.reset();
        self.spawn_timer.reset();
        self.score = 0;
        self.user_message.clear();
        self.name_input.clear();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::GameReset);
    }
}
