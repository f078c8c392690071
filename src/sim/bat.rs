//! The bat: pointer-tracked orientation, drag repositioning and hit queries

use std::collections::VecDeque;
use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::ball::{Ball, CollisionZone};
use super::geometry::{Rect, project_onto_segment, rotate};
use super::stumps::Stumps;
use crate::consts::*;

/// The player's bat, pivoting about the handle end.
///
/// Angle convention: 0 is vertical (blade hanging straight down from the
/// pivot), positive angles rotate clockwise on screen.
#[derive(Debug, Clone)]
pub struct Bat {
    position: Vec2,
    current_angle: f32,
    previous_angle: f32,
    pointer_history: VecDeque<Vec2>,
    is_dragging: bool,
    drag_offset: Vec2,
    drag_start_angle: f32,
}

impl Default for Bat {
    fn default() -> Self {
        Self::new()
    }
}

impl Bat {
    pub fn new() -> Self {
        Self {
            position: Vec2::new(BAT_START_X, BAT_START_Y),
            current_angle: -MAX_SWING_ANGLE,
            previous_angle: 0.0,
            pointer_history: VecDeque::with_capacity(POINTER_HISTORY_LIMIT),
            is_dragging: false,
            drag_offset: Vec2::ZERO,
            drag_start_angle: 0.0,
        }
    }

    /// Pivot position (handle end)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.current_angle
    }

    /// Angular velocity of the last completed update, radians per tick
    pub fn swing_velocity(&self) -> f32 {
        self.current_angle - self.previous_angle
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Advance the bat one tick from the sampled pointer state.
    ///
    /// While the primary button is held the bat is dragged (position follows
    /// the pointer inside the area around the stumps, angle frozen);
    /// otherwise the angle eases toward the pointer direction.
    pub fn update(&mut self, pointer: Vec2, primary_held: bool, stumps_position: Vec2) {
        self.pointer_history.push_back(pointer);
        if self.pointer_history.len() > POINTER_HISTORY_LIMIT {
            self.pointer_history.pop_front();
        }

        if primary_held && !self.is_dragging {
            self.start_drag(pointer);
        }
        if !primary_held && self.is_dragging {
            self.is_dragging = false;
        }

        // Swing velocity is measured against the last completed update
        self.previous_angle = self.current_angle;

        if self.is_dragging {
            self.update_drag_position(pointer, stumps_position);
            return;
        }

        let target = self
            .target_angle(pointer)
            .clamp(-MAX_SWING_ANGLE, MAX_SWING_ANGLE);
        self.current_angle += (target - self.current_angle) * BAT_ANGLE_SMOOTHING;
    }

    fn start_drag(&mut self, pointer: Vec2) {
        self.is_dragging = true;
        self.drag_offset = self.position - pointer;
        self.drag_start_angle = self.current_angle;
    }

    /// Move the bat while dragging; the swing angle stays frozen.
    fn update_drag_position(&mut self, pointer: Vec2, stumps_position: Vec2) {
        let wanted = pointer + self.drag_offset;
        self.position = constrain_to_drag_area(wanted, stumps_position);
        self.current_angle = self.drag_start_angle;
    }

    /// Target angle from vertical for a pointer position (0 = vertical,
    /// positive = clockwise)
    fn target_angle(&self, pointer: Vec2) -> f32 {
        let delta = pointer - self.position;
        (-delta.x).atan2(delta.y.abs())
    }

    /// Reflection normal used for ball impacts
    pub fn face_normal(&self) -> Vec2 {
        let normal_angle = self.current_angle + FRAC_PI_2;
        Vec2::new(normal_angle.cos(), normal_angle.sin())
    }

    /// Hitting line from just below the handle to just short of the toe
    fn hitting_line(&self) -> (Vec2, Vec2) {
        let along = Vec2::new(-self.current_angle.sin(), self.current_angle.cos());
        (
            self.position + along * (BAT_HEIGHT * 0.05),
            self.position + along * (BAT_HEIGHT * 0.95),
        )
    }

    /// Precise bat-vs-ball test against the hitting line.
    ///
    /// Returns which zone of the blade made contact, or `None` on a miss.
    /// This is the authoritative hit test; `bounds` is only used against
    /// the stumps.
    pub fn check_ball_collision(&self, ball: &Ball) -> Option<CollisionZone> {
        let ball_bounds = ball.bounds();
        let ball_center = ball_bounds.center();
        let ball_radius = ball_bounds.width.min(ball_bounds.height) / 2.0;

        let (start, end) = self.hitting_line();
        let t = project_onto_segment(ball_center, start, end);
        let distance = ball_center.distance(start + (end - start) * t);
        if distance > ball_radius + BAT_WIDTH / 2.0 {
            return None;
        }

        if t <= HANDLE_ZONE_FRACTION {
            Some(CollisionZone::Handle)
        } else {
            Some(CollisionZone::Body)
        }
    }

    /// Axis-aligned bounding box of the rotated blade.
    ///
    /// The blade corners are rotated about the pivot and the AABB of the
    /// result is returned; a cheaper stand-in for a true oriented-box test.
    pub fn bounds(&self) -> Rect {
        let half_width = BAT_WIDTH / 2.0;
        let corners = [
            Vec2::new(-half_width, 0.0),
            Vec2::new(half_width, 0.0),
            Vec2::new(half_width, BAT_HEIGHT),
            Vec2::new(-half_width, BAT_HEIGHT),
        ];

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for corner in corners {
            let p = self.position + rotate(corner, self.current_angle);
            min = min.min(p);
            max = max.max(p);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn collides_with(&self, stumps: &Stumps) -> bool {
        self.bounds().intersects(&stumps.bounds())
    }
}

/// Clamp a drag position into the playable area around the stumps
fn constrain_to_drag_area(position: Vec2, stumps_position: Vec2) -> Vec2 {
    Vec2::new(
        position
            .x
            .clamp(stumps_position.x, stumps_position.x + DRAG_AREA_RIGHT),
        position.y.clamp(
            stumps_position.y - DRAG_AREA_UP,
            stumps_position.y + DRAG_AREA_DOWN,
        ),
    )
}
