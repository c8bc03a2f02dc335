// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed body+tail polygon and the views derived from it.
//!
//! Rendering ([`Outline::to_bez_path`]) and hit testing
//! ([`Outline::hit_test`], [`Outline::contains`]) both read the same vertex
//! list, so what is drawn is exactly what is picked.

use kurbo::{BezPath, Point, Rect, Shape};
use smallvec::SmallVec;

use crate::body::{Body, Edge};
use crate::junction::Junction;
use crate::log::debug;
use crate::math::point_segment_distance;
use crate::params::BubbleParams;

/// Vertex count of a bubble with a tail: four corners plus three tail points.
pub const TAILED_VERTEX_COUNT: usize = 7;

/// Ordered vertices of a speech bubble outline.
///
/// The loop starts at the body's top-left corner and runs clockwise. With a
/// tail it has [`TAILED_VERTEX_COUNT`] vertices: the tail's first shoulder,
/// the apex, and the second shoulder are spliced in right after the starting
/// corner of the edge the tail sits on. Without one it is the plain body
/// rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    vertices: SmallVec<[Point; TAILED_VERTEX_COUNT]>,
    junction: Option<Junction>,
    apex: Point,
}

impl Outline {
    /// Splices the tail described by `junction` into the body's corner loop.
    #[must_use]
    pub fn with_tail(body: &Body, junction: Junction, apex: Point) -> Self {
        let (first, second) = junction.shoulders();
        let splice_at = junction.edge.index() + 1;
        let mut vertices: SmallVec<[Point; TAILED_VERTEX_COUNT]> =
            body.corners().into_iter().collect();
        vertices.insert_many(splice_at, [first, apex, second]);
        Self {
            vertices,
            junction: Some(junction),
            apex,
        }
    }

    /// The plain body rectangle, without a tail.
    #[must_use]
    pub fn rectangle(body: &Body, apex: Point) -> Self {
        Self {
            vertices: body.corners().into_iter().collect(),
            junction: None,
            apex,
        }
    }

    /// The outline vertices in drawing order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The junction the tail was built from, if there is a tail.
    #[must_use]
    pub fn junction(&self) -> Option<&Junction> {
        self.junction.as_ref()
    }

    /// The edge carrying the tail.
    #[must_use]
    pub fn edge(&self) -> Option<Edge> {
        self.junction.map(|j| j.edge)
    }

    /// Whether a tail was spliced in.
    #[must_use]
    pub fn has_tail(&self) -> bool {
        self.junction.is_some()
    }

    /// The apex the outline was built for.
    #[must_use]
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Iterates over the closed loop's segments, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The outline as a path: one move-to, a line-to per further vertex, and
    /// a close.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut vertices = self.vertices.iter().copied();
        if let Some(first) = vertices.next() {
            path.move_to(first);
            for pt in vertices {
                path.line_to(pt);
            }
            path.close_path();
        }
        path
    }

    /// SVG path data for the outline.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_svg(&self) -> alloc::string::String {
        self.to_bez_path().to_svg()
    }

    /// Smallest rectangle containing every vertex.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.vertices
            .iter()
            .skip(1)
            .fold(
                self.vertices
                    .first()
                    .map_or(Rect::ZERO, |p| Rect::from_points(*p, *p)),
                |rect, p| rect.union_pt(*p),
            )
    }

    /// Whether `pt` lies inside the filled outline.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.to_bez_path().contains(pt)
    }

    /// Distance from `pt` to the nearest outline segment.
    #[must_use]
    pub fn distance_to_boundary(&self, pt: Point) -> f64 {
        self.segments()
            .map(|(a, b)| point_segment_distance(pt, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Precise hit test in shape-local coordinates.
    ///
    /// Candidates are checked in order of specificity: the apex handle, the
    /// stroked outline, the fill, and finally the fill's near-miss band.
    /// Lower [`HitScore::distance`] is a better hit.
    #[must_use]
    pub fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        if self.has_tail() {
            let to_apex = pt.distance(self.apex);
            if to_apex <= params.handle_radius {
                return Some(HitScore {
                    distance: to_apex,
                    kind: HitKind::Handle,
                });
            }
        }

        let to_boundary = self.distance_to_boundary(pt);
        if to_boundary <= params.stroke_tolerance {
            return Some(HitScore {
                distance: to_boundary,
                kind: HitKind::Stroke,
            });
        }
        if self.contains(pt) {
            return Some(HitScore::filled());
        }
        (to_boundary <= params.fill_tolerance).then_some(HitScore {
            distance: to_boundary,
            kind: HitKind::Fill,
        })
    }
}

/// Kind of hit produced by [`Outline::hit_test`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitKind {
    /// Inside the filled outline, or within the fill tolerance of it.
    Fill,
    /// On the outline, within the stroke tolerance.
    Stroke,
    /// On the draggable apex.
    Handle,
}

/// Parameters for [`Outline::hit_test`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Near-miss radius around the filled outline.
    pub fill_tolerance: f64,
    /// Half-width of the pickable band around the outline.
    pub stroke_tolerance: f64,
    /// Pick radius around the apex.
    pub handle_radius: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
            stroke_tolerance: 0.0,
            handle_radius: 4.0,
        }
    }
}

/// Score of a precise hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance in local units; `0` for interior fill hits.
    pub distance: f64,
    /// What was hit.
    pub kind: HitKind,
}

impl HitScore {
    /// An interior fill hit.
    pub const fn filled() -> Self {
        Self {
            distance: 0.0,
            kind: HitKind::Fill,
        }
    }
}

impl BubbleParams {
    /// Builds the outline for `apex` on `body`.
    ///
    /// Falls back to the plain rectangle when no junction can be found.
    #[must_use]
    pub fn build_outline(&self, body: &Body, apex: Point) -> Outline {
        match self.compute_junction(body, apex) {
            Some(junction) => Outline::with_tail(body, junction, apex),
            None => {
                debug!(apex = ?apex, "no junction, outline without tail");
                Outline::rectangle(body, apex)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const P: BubbleParams = BubbleParams::DEFAULT;

    #[test]
    fn tail_is_spliced_after_the_edge_start() {
        let body = Body::new(100.0, 100.0);
        let cases = [
            (Point::new(50.0, -60.0), Edge::Top, 2),
            (Point::new(160.0, 50.0), Edge::Right, 3),
            (Point::new(50.0, 160.0), Edge::Bottom, 4),
            (Point::new(-60.0, 50.0), Edge::Left, 5),
        ];
        for (apex, edge, apex_index) in cases {
            let outline = P.build_outline(&body, apex);
            assert_eq!(outline.vertices().len(), TAILED_VERTEX_COUNT);
            assert_eq!(outline.edge(), Some(edge));
            assert_eq!(outline.vertices()[apex_index], apex, "{edge:?}");
            assert_eq!(outline.vertices()[0], Point::ORIGIN);
        }
    }

    #[test]
    fn bottom_tail_vertex_order() {
        let body = Body::new(100.0, 100.0);
        let apex = Point::new(50.0, 160.0);
        let outline = P.build_outline(&body, apex);
        assert_eq!(
            outline.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(60.0, 100.0),
                apex,
                Point::new(40.0, 100.0),
                Point::new(0.0, 100.0),
            ]
        );
    }

    #[test]
    fn rectangle_fallback() {
        let body = Body::new(10.0, 20.0);
        let outline = Outline::rectangle(&body, Point::new(30.0, 30.0));
        assert!(!outline.has_tail());
        assert_eq!(outline.vertices(), &body.corners());
        assert_eq!(outline.bounding_box(), body.rect());
    }

    #[test]
    fn path_mirrors_vertices() {
        let body = Body::new(100.0, 100.0);
        let outline = P.build_outline(&body, Point::new(160.0, 50.0));
        let path = outline.to_bez_path();
        let elements = path.elements();
        assert_eq!(elements.len(), TAILED_VERTEX_COUNT + 1);
        assert_eq!(elements[0], PathEl::MoveTo(outline.vertices()[0]));
        for (el, pt) in elements[1..TAILED_VERTEX_COUNT]
            .iter()
            .zip(&outline.vertices()[1..])
        {
            assert_eq!(*el, PathEl::LineTo(*pt));
        }
        assert_eq!(elements[TAILED_VERTEX_COUNT], PathEl::ClosePath);
    }

    #[test]
    fn bounds_include_the_apex() {
        let body = Body::new(100.0, 100.0);
        let outline = P.build_outline(&body, Point::new(160.0, 50.0));
        assert_eq!(outline.bounding_box(), Rect::new(0.0, 0.0, 160.0, 100.0));
    }

    #[test]
    fn tail_interior_is_inside() {
        let body = Body::new(100.0, 100.0);
        let outline = P.build_outline(&body, Point::new(160.0, 50.0));
        assert!(outline.contains(Point::new(50.0, 50.0)));
        assert!(outline.contains(Point::new(130.0, 50.0)));
        assert!(!outline.contains(Point::new(130.0, 20.0)));
        assert!(!outline.contains(Point::new(-5.0, 50.0)));
    }

    #[test]
    fn hit_test_kinds() {
        let body = Body::new(100.0, 100.0);
        let apex = Point::new(160.0, 50.0);
        let outline = P.build_outline(&body, apex);
        let params = HitParams {
            fill_tolerance: 6.0,
            stroke_tolerance: 2.0,
            handle_radius: 5.0,
        };

        let hit = outline.hit_test(Point::new(158.0, 50.0), &params).expect("handle");
        assert_eq!(hit.kind, HitKind::Handle);
        assert_eq!(hit.distance, 2.0);

        let hit = outline.hit_test(Point::new(50.0, 1.0), &params).expect("stroke");
        assert_eq!(hit.kind, HitKind::Stroke);
        assert!((hit.distance - 1.0).abs() < 1e-9);

        let hit = outline.hit_test(Point::new(50.0, 50.0), &params).expect("fill");
        assert_eq!(hit, HitScore::filled());

        let hit = outline.hit_test(Point::new(50.0, -5.0), &params).expect("near fill");
        assert_eq!(hit.kind, HitKind::Fill);
        assert!((hit.distance - 5.0).abs() < 1e-9);

        assert!(outline.hit_test(Point::new(50.0, -20.0), &params).is_none());
    }
}
