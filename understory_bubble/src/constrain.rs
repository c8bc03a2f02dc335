// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the apex a sensible distance from the body.
//!
//! The junction depends only on the direction of the apex as seen from the
//! body center. Moving the apex along that ray therefore leaves the junction
//! where it is, which is what makes the clamp below a projection: applying it
//! to its own output changes nothing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::body::Body;
use crate::junction::Junction;
use crate::log::debug;
use crate::math::unit_direction;
use crate::params::BubbleParams;

/// Slack on the distance band, relative to the body diagonal.
const BAND_SLACK: f64 = 1e-9;

/// How far past the boundary an apex relocated from inside the body lands
/// at least, as a fraction of the minimum distance.
const INSIDE_OUTSET: f64 = 0.5;

/// The ray from the body center through the apex, parametrized by distance
/// from the center.
struct ApexRay {
    center: Point,
    dir: Vec2,
    /// Where the ray leaves the body.
    exit: f64,
    /// `dir · (center − junction)`.
    b: f64,
    /// `|center − junction|²`.
    c: f64,
}

impl ApexRay {
    fn new(center: Point, apex: Point, junction: &Junction) -> Self {
        let dir = unit_direction(center, apex);
        let q = center - junction.point;
        Self {
            center,
            dir,
            exit: (junction.crossing - center).hypot(),
            b: dir.dot(q),
            c: q.hypot2(),
        }
    }

    /// The farther ray parameter at `distance` from the junction, if the ray
    /// ever gets that close.
    fn far_root(&self, distance: f64) -> Option<f64> {
        let disc = self.b * self.b - self.c + distance * distance;
        (disc >= 0.0).then(|| -self.b + disc.sqrt())
    }

    fn at(&self, s: f64) -> Point {
        self.center + self.dir * s
    }
}

impl BubbleParams {
    /// Constrains a proposed apex before it is committed.
    ///
    /// - An apex inside the body is moved out along its direction from the
    ///   body center until it is [`min_distance`](Self::min_distance) from
    ///   the junction, and at least half that distance past the boundary.
    ///   On long edges, where the junction can sit well away from the
    ///   crossing, that floor wins and the apex lands further than
    ///   `min_distance` from the junction (still within `max_distance`).
    /// - An apex outside the body whose distance to the junction falls
    ///   outside `[min_distance, max_distance]` is slid along the same ray
    ///   until the distance is back on the nearest bound.
    /// - Anything else is returned unchanged.
    ///
    /// The apex keeps its direction as seen from the body center, not as
    /// seen from the junction. Moving along the center ray leaves the
    /// crossing, and so the junction, where it is; keeping the direction
    /// from the junction instead would move the junction on every call.
    ///
    /// Never fails: when no junction can be computed the proposal is passed
    /// through. The result is a fixed point, so calling this again on its
    /// own output is a no-op.
    #[must_use]
    pub fn enforce_apex_constraints(&self, body: &Body, proposed: Point) -> Point {
        let Some(junction) = self.compute_junction(body, proposed) else {
            debug!(apex = ?proposed, "no junction, apex left unconstrained");
            return proposed;
        };

        let diagonal = body.diagonal();
        let min = self.min_distance(diagonal);
        let max = self.max_distance(diagonal);
        let slack = diagonal * BAND_SLACK;
        let distance = proposed.distance(junction.point);

        if !junction.inside_body && distance >= min - slack && distance <= max + slack {
            return proposed;
        }

        let ray = ApexRay::new(body.center(), proposed, &junction);
        let s = if junction.inside_body {
            let floor = ray.exit + min * INSIDE_OUTSET;
            let s = ray.far_root(min).map_or(floor, |s| s.max(floor));
            match ray.far_root(max) {
                Some(cap) => s.min(cap),
                None => s,
            }
        } else {
            let target = if distance < min { min } else { max };
            match ray.far_root(target) {
                Some(s) if s > ray.exit => s,
                _ => return proposed,
            }
        };

        let constrained = ray.at(s);
        debug!(
            from = ?proposed,
            to = ?constrained,
            inside = junction.inside_body,
            distance,
            "apex constrained"
        );
        constrained
    }
}
