// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar and segment helpers on top of [`kurbo`] points and vectors.
//!
//! Everything here is a pure function over finite inputs. The range helpers
//! divide by the width of their source range; callers must not pass an empty
//! range.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, ParamCurveNearest, Point, Vec2};

/// Linear interpolation between `a` and `b`.
///
/// `t = 0` yields `a`, `t = 1` yields `b`; `t` is not clamped.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `v` sits between `a` and `b`.
///
/// `a` and `b` must differ.
#[inline]
#[must_use]
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a)
}

/// Maps `v` from the range `[src_lo, src_hi]` onto `[dst_lo, dst_hi]`.
///
/// ```
/// use understory_bubble::math::map_range;
///
/// assert_eq!(map_range(10.0, 20.0, 50.0, 100.0, 15.0), 75.0);
/// ```
///
/// The source range must not be empty.
#[inline]
#[must_use]
pub fn map_range(src_lo: f64, src_hi: f64, dst_lo: f64, dst_hi: f64, v: f64) -> f64 {
    lerp(dst_lo, dst_hi, inv_lerp(src_lo, src_hi, v))
}

/// Unit vector pointing from `from` towards `to`.
///
/// Coincident points have no direction; they fall back to the angle `0`
/// (the positive x axis) so callers always get a usable unit vector.
#[must_use]
pub fn unit_direction(from: Point, to: Point) -> Vec2 {
    Vec2::from_angle((to - from).atan2())
}

/// The point at `distance` from `origin` along `angle` (radians).
#[inline]
#[must_use]
pub fn point_from_angle(origin: Point, angle: f64, distance: f64) -> Point {
    origin + Vec2::from_angle(angle) * distance
}

/// Shortest distance from `pt` to the segment `a`–`b`.
#[must_use]
pub fn point_segment_distance(pt: Point, a: Point, b: Point) -> f64 {
    Line::new(a, b).nearest(pt, 0.).distance_sq.sqrt()
}

/// Intersection of the segments `a1`–`a2` and `b1`–`b2`.
///
/// Solves the parametric form of both segments and accepts the hit only
/// when both parameters lie in `[0, 1]`. Parallel segments never intersect.
/// Coincident configurations, where `a1` lies on the line through `b` or
/// `b1` lies on the line through `a`, are also reported as `None`: callers
/// casting rays treat a grazing contact as no crossing at all.
#[must_use]
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let ab = a1 - b1;
    let bv = b2 - b1;
    let av = a2 - a1;

    let ua_t = bv.cross(ab);
    let ub_t = av.cross(ab);
    let denom = bv.y * av.x - bv.x * av.y;

    if ua_t == 0.0 || ub_t == 0.0 || denom == 0.0 {
        return None;
    }

    let ua = ua_t / denom;
    let ub = ub_t / denom;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(a1 + av * ua)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn lerp_and_inverse() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.5), 5.0);
        assert_eq!(inv_lerp(2.0, 4.0, 3.0), 0.5);
        assert!(close(inv_lerp(2.0, 4.0, lerp(2.0, 4.0, 0.3)), 0.3));
    }

    #[test]
    fn map_range_handles_inverted_destination() {
        assert_eq!(map_range(0.0, 10.0, 1.0, -1.0, 0.0), 1.0);
        assert_eq!(map_range(0.0, 10.0, 1.0, -1.0, 10.0), -1.0);
        assert_eq!(map_range(0.0, 10.0, 1.0, -1.0, 5.0), 0.0);
    }

    #[test]
    fn unit_direction_falls_back_to_x_axis() {
        let p = Point::new(3.0, 4.0);
        let dir = unit_direction(p, p);
        assert!(close(dir.x, 1.0));
        assert!(close(dir.y, 0.0));

        let dir = unit_direction(Point::ORIGIN, Point::new(0.0, -5.0));
        assert!(close(dir.x, 0.0));
        assert!(close(dir.y, -1.0));
    }

    #[test]
    fn point_from_angle_walks_along_the_angle() {
        let p = point_from_angle(Point::new(1.0, 1.0), core::f64::consts::FRAC_PI_2, 2.0);
        assert!(close(p.x, 1.0));
        assert!(close(p.y, 3.0));
    }

    #[test]
    fn distance_to_segment_interior_and_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(close(point_segment_distance(Point::new(5.0, 3.0), a, b), 3.0));
        assert!(close(point_segment_distance(Point::new(-3.0, 4.0), a, b), 5.0));
        assert!(close(point_segment_distance(Point::new(10.0, 0.0), a, b), 0.0));
    }

    #[test]
    fn crossing_segments_intersect() {
        let hit = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        )
        .expect("diagonals cross");
        assert!(close(hit.x, 5.0));
        assert!(close(hit.y, 5.0));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(5.0, 0.0),
                Point::new(6.0, -4.0),
            )
            .is_none()
        );
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(10.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn coincident_start_is_not_a_crossing() {
        // `a1` sits on the line through `b`.
        assert!(
            segment_intersection(
                Point::new(5.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
            )
            .is_none()
        );
        // `b1` sits on the line through `a`.
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 0.0),
            )
            .is_none()
        );
    }
}
