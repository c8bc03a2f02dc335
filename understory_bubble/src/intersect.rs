// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Casting the apex→center segment against the body outline.

use kurbo::Point;

use crate::log::trace;
use crate::math::{point_segment_distance, segment_intersection, unit_direction};

/// Distance from the cast segment, relative to its length, within which a
/// polygon vertex counts as lying on it.
const VERTEX_SNAP: f64 = 1e-9;

/// Where the apex→center segment first crosses a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Index `i` of the crossed edge `points[i]`–`points[(i + 1) % n]`.
    pub edge_index: usize,
    /// The crossing point.
    pub point: Point,
    /// The apex was inside the polygon and the crossing was found by
    /// projecting it outwards first.
    pub inside: bool,
}

/// Finds the first polygon edge crossed by the segment from `apex` to
/// `center`.
///
/// `points` is a closed vertex loop. A segment passing through a vertex is
/// attributed to the edge ending at that vertex, with the vertex itself as
/// the crossing; otherwise edges are tested in loop order and the first hit
/// wins. Grazing contacts are not crossings (see [`segment_intersection`]).
///
/// When nothing is crossed the apex is taken to be inside. It is then pushed
/// outwards along the center→apex direction by the polygon's far extent and
/// the cast is repeated once; a hit on that second cast is flagged as
/// [`RayHit::inside`]. A second miss means the polygon is degenerate and
/// yields `None`.
#[must_use]
pub fn cast_to_boundary(apex: Point, center: Point, points: &[Point]) -> Option<RayHit> {
    if let Some(hit) = first_crossing(apex, center, points) {
        trace!(edge = hit.edge_index, "apex outside polygon");
        return Some(hit);
    }

    let projected = apex + unit_direction(center, apex) * far_extent(points);
    let hit = first_crossing(projected, center, points)?;
    trace!(edge = hit.edge_index, "apex inside polygon");
    Some(RayHit {
        inside: true,
        ..hit
    })
}

fn first_crossing(apex: Point, center: Point, points: &[Point]) -> Option<RayHit> {
    through_vertex(apex, center, points).or_else(|| through_edge(apex, center, points))
}

/// A vertex lying on the segment, strictly between its ends.
///
/// Both edges meeting at such a vertex can reject the segment in
/// [`segment_intersection`]: one as coincident, the other by a parameter
/// rounded just past `1`.
fn through_vertex(apex: Point, center: Point, points: &[Point]) -> Option<RayHit> {
    let n = points.len();
    let tolerance = apex.distance(center) * VERTEX_SNAP;
    (0..n).find_map(|i| {
        let vertex = points[(i + 1) % n];
        let on_segment = vertex.distance(apex) > tolerance
            && vertex.distance(center) > tolerance
            && point_segment_distance(vertex, apex, center) <= tolerance;
        on_segment.then_some(RayHit {
            edge_index: i,
            point: vertex,
            inside: false,
        })
    })
}

fn through_edge(apex: Point, center: Point, points: &[Point]) -> Option<RayHit> {
    let n = points.len();
    (0..n).find_map(|i| {
        segment_intersection(apex, center, points[i], points[(i + 1) % n]).map(|point| RayHit {
            edge_index: i,
            point,
            inside: false,
        })
    })
}

/// The largest coordinate extent of the loop, measured from the origin.
///
/// For a body anchored at the origin this is `max(width, height)`, which is
/// always enough to carry any interior point past the boundary.
fn far_extent(points: &[Point]) -> f64 {
    points
        .iter()
        .fold(0.0_f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()))
}
