// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the tail meets the body.
//!
//! The raw crossing of the apex→center ray is a poor anchor for the tail: it
//! slides into the corners as soon as the apex swings diagonally. The
//! junction is therefore moved along the crossed edge by two corrections:
//!
//! - a *center bias*, which remaps the signed distance from the edge
//!   midpoint through `sign(m)·|m|^k` and pulls the junction towards the
//!   middle, harder the further out it starts;
//! - a *corner clearance*, which squeezes the full edge into the sub-range
//!   that keeps `clearance` tail offsets away from either corner.
//!
//! The two are blended, and the blend is finally clamped back into the
//! clearance sub-range so the tail base never reaches a corner.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::body::{Body, Edge};
use crate::intersect::cast_to_boundary;
use crate::math::{lerp, map_range};
use crate::params::BubbleParams;

/// The derived anchor of the tail on the body boundary.
///
/// Recomputed from `(body, apex)` on every query; never store one across an
/// edit of either.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Junction {
    /// The edge the tail sits on.
    pub edge: Edge,
    /// The adjusted junction point on `edge`.
    pub point: Point,
    /// Where the apex→center ray actually crossed the boundary.
    pub crossing: Point,
    /// Half-width of the tail's base along `edge`.
    pub offset: f64,
    /// The apex lies inside (or on the boundary of) the body.
    pub inside_body: bool,
}

impl Junction {
    /// Signed distance from `apex` to the line of the junction's edge,
    /// positive outside the body.
    ///
    /// This is how far the tail reaches beyond the body, measured
    /// perpendicular to the edge rather than along the tail.
    #[must_use]
    pub fn tail_depth(&self, apex: Point) -> f64 {
        (apex - self.point).dot(self.edge.outward_normal())
    }

    /// The two base corners of the tail, in outline order.
    ///
    /// The first shoulder is the one reached first when walking the body's
    /// clockwise corner loop along [`Junction::edge`].
    #[must_use]
    pub fn shoulders(&self) -> (Point, Point) {
        let along = match self.edge {
            Edge::Top => Vec2::new(self.offset, 0.0),
            Edge::Right => Vec2::new(0.0, self.offset),
            Edge::Bottom => Vec2::new(-self.offset, 0.0),
            Edge::Left => Vec2::new(0.0, -self.offset),
        };
        (self.point - along, self.point + along)
    }
}

impl BubbleParams {
    /// Computes the tail junction for `apex` on `body`.
    ///
    /// Returns `None` only when no boundary crossing can be found at all,
    /// which a body built through [`Body::new`] cannot produce.
    #[must_use]
    pub fn compute_junction(&self, body: &Body, apex: Point) -> Option<Junction> {
        let hit = cast_to_boundary(apex, body.center(), &body.corners())?;
        let crossed = Edge::from_index(hit.edge_index)?;
        let edge = Edge::classify(hit.point, body, self.edge_snap_tolerance, crossed);
        let offset = self.offset_for(edge.length(body));
        let (start, end) = edge.endpoints(body);
        let point = self.adjust_along_edge(start, end, hit.point, offset);
        Some(Junction {
            edge,
            point,
            crossing: hit.point,
            offset,
            inside_body: hit.inside,
        })
    }

    /// Moves `crossing` along the edge `start`–`end` towards the midpoint and
    /// away from the corners.
    ///
    /// `offset` is the tail offset for this edge; the result stays at least
    /// `offset · corner_clearance` from both endpoints.
    #[must_use]
    pub fn adjust_along_edge(&self, start: Point, end: Point, crossing: Point, offset: f64) -> Point {
        let length = start.distance(end);
        if length <= 0.0 {
            return start;
        }
        let distance = crossing.distance(start).min(length);

        let relative = map_range(0.0, length, -1.0, 1.0, distance);
        let biased = relative.signum() * relative.abs().powf(self.center_bias_exponent);
        let biased = map_range(-1.0, 1.0, 0.0, length, biased);

        let clearance = offset * self.corner_clearance;
        let (lo, hi) = (clearance, length - clearance);
        let constrained = map_range(0.0, length, lo, hi, distance);

        let blended = lerp(constrained, biased, self.center_bias_blend);
        let along = if lo <= hi {
            blended.max(lo).min(hi)
        } else {
            length * 0.5
        };

        start.lerp(end, along / length)
    }
}
