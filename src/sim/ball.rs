//! The ball: gravity integration, lifecycle and the deflection policy

use glam::Vec2;
use rand::Rng;

use super::bat::Bat;
use super::geometry::{Rect, reflect};
use super::stumps::Stumps;
use crate::consts::*;

/// Where on the blade a ball made contact.
///
/// Handle contacts deflect with more scatter and less pace than clean
/// contacts on the body of the blade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionZone {
    Handle,
    Body,
}

impl CollisionZone {
    /// Full width of the random angle perturbation, radians
    pub fn randomness(self) -> f32 {
        match self {
            CollisionZone::Handle => 0.6,
            CollisionZone::Body => 0.3,
        }
    }

    /// Scale applied to the deflection speed
    pub fn speed_multiplier(self) -> f32 {
        match self {
            CollisionZone::Handle => 0.7,
            CollisionZone::Body => 1.0,
        }
    }

    /// Extra lift subtracted from the vertical velocity, pixels per tick
    pub fn upward_bias(self) -> f32 {
        match self {
            CollisionZone::Handle => 0.33,
            CollisionZone::Body => 0.5,
        }
    }

    /// Deflection speed floor, pixels per tick
    pub fn min_speed(self) -> f32 {
        let floor_per_sec = match self {
            CollisionZone::Handle => 70.0,
            CollisionZone::Body => 100.0,
        };
        floor_per_sec / TICKS_PER_SECOND as f32
    }
}

/// A single bowled ball. Velocity is in pixels per tick.
#[derive(Debug, Clone)]
pub struct Ball {
    position: Vec2,
    velocity: Vec2,
    active: bool,
    is_hit: bool,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            active: true,
            is_hit: false,
        }
    }

    /// Bowl a fresh ball from just past the right edge at a random height
    /// in the top two-thirds of the screen, moving straight left with a
    /// random pace.
    pub fn spawn<R: Rng>(rng: &mut R, screen_width: f32, screen_height: f32) -> Self {
        let start_y = rng.random_range(0.0..screen_height * 2.0 / 3.0);
        let speed = rng.random_range(BALL_SPAWN_SPEED_MIN..=BALL_SPAWN_SPEED_MAX);
        Self::new(
            Vec2::new(screen_width + BALL_SIZE, start_y),
            Vec2::new(-speed, 0.0),
        )
    }

    /// Sprite top-left corner
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// False once the ball has left the play area
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once the bat has struck this ball
    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    /// Advance one tick: gravity, integration, off-screen deactivation.
    /// Inactive balls never move again.
    pub fn update(&mut self, screen_width: f32, screen_height: f32) {
        if !self.active {
            return;
        }

        self.velocity.y += BALL_GRAVITY;
        self.position += self.velocity;

        if self.is_off_screen(screen_width, screen_height) {
            self.active = false;
        }
    }

    fn is_off_screen(&self, screen_width: f32, screen_height: f32) -> bool {
        self.position.y > screen_height + BALL_SIZE
            || self.position.x < -BALL_SIZE
            || self.position.x > screen_width + BALL_SIZE
            || self.position.y < -BALL_SIZE
    }

    /// Deflect off the bat.
    ///
    /// Returns false without touching the velocity when the ball was
    /// already struck or is out of play; a ball is only ever struck once.
    pub fn hit<R: Rng>(&mut self, bat: &Bat, zone: CollisionZone, rng: &mut R) -> bool {
        if self.is_hit || !self.active {
            return false;
        }
        let perturbation = (rng.random::<f32>() - 0.5) * zone.randomness();
        self.apply_hit(bat.face_normal(), bat.swing_velocity(), zone, perturbation)
    }

    /// Deterministic core of the hit response; `perturbation` is the
    /// sampled deflection-angle noise in radians.
    pub fn apply_hit(
        &mut self,
        normal: Vec2,
        swing: f32,
        zone: CollisionZone,
        perturbation: f32,
    ) -> bool {
        if self.is_hit || !self.active {
            return false;
        }
        self.is_hit = true;

        let reflected = reflect(self.velocity, normal);
        let deflection = reflected.y.atan2(reflected.x) + perturbation;

        // Swing contribution is an angular delta per tick, rescaled to a
        // per-second-equivalent term
        let mut hit_speed = self.velocity.length()
            + swing.abs() * HIT_SPEED_MULTIPLIER * TICKS_PER_SECOND as f32;
        hit_speed = hit_speed.max(zone.min_speed()) * zone.speed_multiplier();

        self.velocity = Vec2::new(-deflection.cos(), -deflection.sin()) * hit_speed;

        // Lift the ball unless it is already climbing steeply
        let min_upward = MIN_UPWARD_SPEED_AFTER_HIT / TICKS_PER_SECOND as f32;
        if self.velocity.y > -min_upward {
            self.velocity.y -= zone.upward_bias();
        }

        true
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, BALL_SIZE, BALL_SIZE)
    }

    /// Strict AABB overlap with the stumps; always false out of play
    pub fn collides_with(&self, stumps: &Stumps) -> bool {
        self.active && self.bounds().intersects(&stumps.bounds())
    }
}
