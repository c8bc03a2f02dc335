// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::body::Body;

/// Per-axis scale factors taking `old` to `new`.
#[must_use]
pub fn resize_ratios(old: &Body, new: &Body) -> Vec2 {
    Vec2::new(new.width() / old.width(), new.height() / old.height())
}

/// Moves `apex` so it keeps its place relative to a resized body.
///
/// The apex is scaled component-wise by `new / old`, so it stays attached to
/// the body instead of lingering at stale coordinates. Apply this whenever
/// the body's size changes.
///
/// ```
/// use kurbo::Point;
/// use understory_bubble::{Body, resize_transform};
///
/// let apex = resize_transform(
///     &Body::new(100.0, 130.0),
///     &Body::new(200.0, 260.0),
///     Point::new(180.0, 180.0),
/// );
/// assert_eq!(apex, Point::new(360.0, 360.0));
/// ```
#[must_use]
pub fn resize_transform(old: &Body, new: &Body, apex: Point) -> Point {
    let ratios = resize_ratios(old, new);
    Point::new(apex.x * ratios.x, apex.y * ratios.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_resize_only_moves_that_axis() {
        let old = Body::new(100.0, 100.0);
        let new = Body::new(50.0, 100.0);
        let apex = resize_transform(&old, &new, Point::new(-40.0, 150.0));
        assert_eq!(apex, Point::new(-20.0, 150.0));
    }

    #[test]
    fn identity_resize_is_a_no_op() {
        let body = Body::new(37.0, 91.0);
        let apex = Point::new(12.5, -3.25);
        assert_eq!(resize_transform(&body, &body, apex), apex);
    }

    #[test]
    fn ratios_compose() {
        let a = Body::new(100.0, 130.0);
        let b = Body::new(150.0, 65.0);
        let c = Body::new(30.0, 260.0);
        let apex = Point::new(180.0, 180.0);
        let stepwise = resize_transform(&b, &c, resize_transform(&a, &b, apex));
        let direct = resize_transform(&a, &c, apex);
        assert!(stepwise.distance(direct) < 1e-9);
    }
}
