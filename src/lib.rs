//! Crease - a 2D cricket batting arcade game
//!
//! Balls are bowled in from the right edge toward the stumps; the player
//! swings or drags the bat to deflect them away for points. Letting a ball
//! through to the stumps ("bowled") or knocking them over with the bat
//! ("hit wicket") ends the round.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: Configuration from file and environment
//! - `highscores`: Best-score record persistence

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::{HighScore, HighScoreStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate; one tick is one frame
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Bat blade width in pixels
    pub const BAT_WIDTH: f32 = 20.0;
    /// Bat blade length in pixels; the pivot sits at the top-center
    /// (handle end) of the blade rectangle
    pub const BAT_HEIGHT: f32 = 130.0;
    /// Maximum swing, 60 degrees either side of vertical
    pub const MAX_SWING_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// First-order smoothing factor for pointer tracking
    pub const BAT_ANGLE_SMOOTHING: f32 = 0.3;
    /// Pointer positions kept for swing diagnostics
    pub const POINTER_HISTORY_LIMIT: usize = 10;
    /// Bat starting pivot position
    pub const BAT_START_X: f32 = 200.0;
    pub const BAT_START_Y: f32 = 350.0;
    /// Contacts at or below this fraction of the hitting line count as
    /// handle contacts
    pub const HANDLE_ZONE_FRACTION: f32 = 0.25;

    /// Draggable area bounds, relative to the stumps position
    pub const DRAG_AREA_RIGHT: f32 = 400.0;
    pub const DRAG_AREA_UP: f32 = 200.0;
    pub const DRAG_AREA_DOWN: f32 = 100.0;

    /// Ball sprite extent in pixels (square)
    pub const BALL_SIZE: f32 = 16.0;
    /// Downward velocity gained each tick
    pub const BALL_GRAVITY: f32 = 0.03;
    /// Spawn speed range, pixels per tick
    pub const BALL_SPAWN_SPEED_MIN: f32 = 7.0;
    pub const BALL_SPAWN_SPEED_MAX: f32 = 9.5;
    /// How much swing angular velocity feeds into deflection speed
    pub const HIT_SPEED_MULTIPLIER: f32 = 2.0;
    /// Vertical speed (pixels per second) below which a struck ball gets
    /// extra lift
    pub const MIN_UPWARD_SPEED_AFTER_HIT: f32 = 50.0;

    /// Stumps sprite extents in pixels
    pub const STUMPS_WIDTH: f32 = 30.0;
    pub const STUMPS_HEIGHT: f32 = 70.0;
    /// Stumps x position (left side of the screen)
    pub const STUMPS_X: f32 = 30.0;
    /// Stumps sit this fraction down the available screen height
    pub const STUMPS_Y_FRACTION: f32 = 0.9;
}
