// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::params::MIN_EXTENT;

/// The rectangular body of a speech bubble, in shape-local space.
///
/// The top-left corner is always at the local origin, so a body is fully
/// described by its size. Both extents are strictly positive: [`Body::new`]
/// clamps degenerate or non-finite input to [`MIN_EXTENT`] so geometry built
/// from a body never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    size: Size,
}

impl Body {
    /// Creates a body of `width` × `height`, clamping each extent to at least
    /// [`MIN_EXTENT`].
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_min_extent(width, height, MIN_EXTENT)
    }

    /// Creates a body, clamping each extent to at least `min_extent`.
    #[must_use]
    pub fn with_min_extent(width: f64, height: f64, min_extent: f64) -> Self {
        let min_extent = if min_extent.is_finite() && min_extent > 0.0 {
            min_extent
        } else {
            MIN_EXTENT
        };
        let clamp = |v: f64| if v.is_finite() { v.max(min_extent) } else { min_extent };
        Self {
            size: Size::new(clamp(width), clamp(height)),
        }
    }

    /// Creates a body from a [`Size`].
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Width of the body.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the body.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Size of the body.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The body as a rectangle anchored at the local origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Center of the body.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width * 0.5, self.size.height * 0.5)
    }

    /// Corner-to-corner distance.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        Vec2::new(self.size.width, self.size.height).hypot()
    }

    /// The four corners, clockwise from the top-left.
    ///
    /// Edge `i` of the loop runs from `corners[i]` to `corners[(i + 1) % 4]`
    /// and is labelled by [`Edge::from_index`].
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let Size { width, height } = self.size;
        [
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ]
    }

    /// Whether `pt` lies inside the body or on its boundary.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        (0.0..=self.size.width).contains(&pt.x) && (0.0..=self.size.height).contains(&pt.y)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// One side of the body.
///
/// The discriminants follow the clockwise corner loop of [`Body::corners`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `y = 0`.
    Top,
    /// `x = width`.
    Right,
    /// `y = height`.
    Bottom,
    /// `x = 0`.
    Left,
}

impl Edge {
    /// All edges in corner-loop order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position of this edge in the corner loop.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// The edge at position `index` of the corner loop, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Top),
            1 => Some(Self::Right),
            2 => Some(Self::Bottom),
            3 => Some(Self::Left),
            _ => None,
        }
    }

    /// Whether this edge runs along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Unit normal pointing away from the body.
    #[must_use]
    pub const fn outward_normal(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
        }
    }

    /// Start and end of this edge as walked by the junction adjuster.
    ///
    /// Edges always run towards increasing coordinates: left to right for
    /// horizontal edges, top to bottom for vertical ones. This is not the
    /// winding of [`Body::corners`].
    #[must_use]
    pub fn endpoints(self, body: &Body) -> (Point, Point) {
        let (w, h) = (body.width(), body.height());
        match self {
            Self::Top => (Point::new(0.0, 0.0), Point::new(w, 0.0)),
            Self::Right => (Point::new(w, 0.0), Point::new(w, h)),
            Self::Bottom => (Point::new(0.0, h), Point::new(w, h)),
            Self::Left => (Point::new(0.0, 0.0), Point::new(0.0, h)),
        }
    }

    /// Length of this edge on `body`.
    #[must_use]
    pub fn length(self, body: &Body) -> f64 {
        if self.is_horizontal() {
            body.width()
        } else {
            body.height()
        }
    }

    /// Whether `pt` lies on the line of this edge, within `tolerance`.
    #[must_use]
    pub fn touches(self, pt: Point, body: &Body, tolerance: f64) -> bool {
        match self {
            Self::Top => pt.y.abs() < tolerance,
            Self::Right => (pt.x - body.width()).abs() < tolerance,
            Self::Bottom => (pt.y - body.height()).abs() < tolerance,
            Self::Left => pt.x.abs() < tolerance,
        }
    }

    /// Labels the edge a boundary point lies on.
    ///
    /// The `crossed` edge is authoritative whenever `pt` is within
    /// `tolerance` of its line. A crossing produced by the ray cast always
    /// is, so for junctions this only confirms the cast's edge index. The
    /// coordinate comparison against `0`, the width, and the height decides
    /// only for points supplied from elsewhere: the first match in
    /// corner-loop order wins, and a point matching no edge keeps `crossed`.
    #[must_use]
    pub fn classify(pt: Point, body: &Body, tolerance: f64, crossed: Self) -> Self {
        if crossed.touches(pt, body, tolerance) {
            return crossed;
        }
        Self::ALL
            .into_iter()
            .find(|edge| edge.touches(pt, body, tolerance))
            .unwrap_or(crossed)
    }
}
