//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One tick = one frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod bat;
pub mod geometry;
pub mod state;
pub mod stumps;
pub mod tick;

pub use ball::{Ball, CollisionZone};
pub use bat::Bat;
pub use geometry::{Rect, angle_between, distance_point_to_segment, reflect, rotate};
pub use state::{
    GameEvent, GamePhase, GameState, MESSAGE_BOWLED, MESSAGE_HIT_WICKET, SimConfig, SpawnTimer,
};
pub use stumps::Stumps;
pub use tick::{TickInput, sanitize_name, tick};
