//! The wicket: a static target that falls at most once per round

use glam::Vec2;

use super::ball::Ball;
use super::bat::Bat;
use super::geometry::Rect;
use crate::consts::*;

/// The stumps defended by the batsman. Once fallen they stay down until
/// the round resets.
#[derive(Debug, Clone)]
pub struct Stumps {
    position: Vec2,
    is_fallen: bool,
}

impl Stumps {
    /// Place the stumps near the bottom-left of a screen of the given height
    pub fn new(screen_height: f32) -> Self {
        Self {
            position: Vec2::new(
                STUMPS_X,
                STUMPS_Y_FRACTION * (screen_height - STUMPS_HEIGHT),
            ),
            is_fallen: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_fallen(&self) -> bool {
        self.is_fallen
    }

    /// True when a live ball overlaps the wicket; always false once fallen
    pub fn hit_by_ball(&self, ball: &Ball) -> bool {
        !self.is_fallen && ball.collides_with(self)
    }

    /// True when the bat overlaps the wicket ("hit wicket"); always false
    /// once fallen
    pub fn hit_by_bat(&self, bat: &Bat) -> bool {
        !self.is_fallen && bat.collides_with(self)
    }

    pub fn fall(&mut self) {
        self.is_fallen = true;
    }

    pub fn reset(&mut self) {
        self.is_fallen = false;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, STUMPS_WIDTH, STUMPS_HEIGHT)
    }
}
