//! Vector and rectangle primitives shared by every entity
//!
//! Vector algebra comes from `glam::Vec2` (`normalize_or_zero` gives the
//! zero-vector-stays-zero convention); this module adds what the collision
//! model needs on top: reflection, zero-safe angle measurement,
//! point-to-segment projection and an axis-aligned rectangle.

use glam::Vec2;

/// Reflect `incident` off a surface with unit normal `normal`.
///
/// Standard reflection: v' = v - 2(v·n)n. The normal is assumed to be unit
/// length and is not renormalized here.
#[inline]
pub fn reflect(incident: Vec2, normal: Vec2) -> Vec2 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Angle between two vectors, in `[0, π]`.
///
/// Returns 0 when either vector has zero magnitude so callers never see a
/// NaN out of the acos.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let mag = a.length() * b.length();
    if mag == 0.0 {
        return 0.0;
    }
    (a.dot(b) / mag).clamp(-1.0, 1.0).acos()
}

/// Clamped parametric position of the projection of `point` onto the
/// segment `a..b`, in `[0, 1]`. A degenerate segment projects to 0.
pub fn project_onto_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    ((point - a).dot(seg) / len_sq).clamp(0.0, 1.0)
}

/// Shortest distance from `point` to the segment `a..b`.
///
/// A degenerate segment (a == b) reduces to the distance to `a`.
pub fn distance_point_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let t = project_onto_segment(point, a, b);
    point.distance(a + (b - a) * t)
}

/// Rotate a vector by `angle` radians. With y-down screen coordinates a
/// positive angle rotates clockwise.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict AABB overlap test: rectangles that merely touch along an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn test_reflect_head_on() {
        // Moving right into a wall whose normal points left
        let reflected = reflect(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x + 100.0).abs() < 1e-3);
        assert!(reflected.y.abs() < 1e-3);
    }

    #[test]
    fn test_reflect_grazing_keeps_tangential_component() {
        // 45 degrees onto a floor with upward normal
        let reflected = reflect(Vec2::new(1.0, 1.0), Vec2::new(0.0, -1.0));
        assert!((reflected.x - 1.0).abs() < 1e-6);
        assert!((reflected.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_between_zero_vector() {
        assert_eq!(angle_between(Vec2::ZERO, Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(angle_between(Vec2::new(1.0, 0.0), Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_angle_between_perpendicular() {
        let angle = angle_between(Vec2::new(1.0, 0.0), Vec2::new(0.0, 5.0));
        assert!((angle - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_angle_between_opposite() {
        let angle = angle_between(Vec2::new(2.0, 0.0), Vec2::new(-3.0, 0.0));
        assert!((angle - PI).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_segment_distance() {
        let a = Vec2::new(3.0, 4.0);
        let d = distance_point_to_segment(Vec2::ZERO, a, a);
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_distance_perpendicular() {
        // Point above the middle of a horizontal segment
        let d = distance_point_to_segment(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoint() {
        // Point past the right end of the segment
        let d = distance_point_to_segment(
            Vec2::new(14.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate(Vec2::new(0.0, 1.0), -FRAC_PI_2);
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_rect_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    proptest! {
        #[test]
        fn normalize_has_unit_magnitude(x in -1e3f32..1e3, y in -1e3f32..1e3) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 1e-3);
            prop_assert!((v.normalize_or_zero().length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn reflect_preserves_magnitude(
            x in -1e3f32..1e3,
            y in -1e3f32..1e3,
            theta in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(x, y);
            let normal = Vec2::new(theta.cos(), theta.sin());
            let reflected = reflect(v, normal);
            let tolerance = v.length().max(1.0) * 1e-4;
            prop_assert!((reflected.length() - v.length()).abs() < tolerance);
        }

        #[test]
        fn rect_intersects_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 0.1f32..50.0, ah in 0.1f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            bw in 0.1f32..50.0, bh in 0.1f32..50.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn segment_distance_is_non_negative(
            px in -100.0f32..100.0, py in -100.0f32..100.0,
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
        ) {
            let d = distance_point_to_segment(
                Vec2::new(px, py),
                Vec2::new(ax, ay),
                Vec2::new(bx, by),
            );
            prop_assert!(d >= 0.0);
            prop_assert!(d.is_finite());
        }
    }
}
