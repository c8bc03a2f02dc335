// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A speech bubble shape record for hosts that want one ready-made.
//!
//! [`SpeechBubble`] is plain data: every edit returns a new value that has
//! already been through [`BubbleParams::enforce_apex_constraints`], and every
//! derived view is recomputed on request.

use kurbo::{Point, Rect};

use crate::body::Body;
use crate::junction::Junction;
use crate::outline::Outline;
use crate::params::BubbleParams;
use crate::resize::resize_transform;

/// Stable identifier of a draggable handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandleId(pub u32);

impl HandleId {
    /// The tail apex.
    pub const APEX: Self = Self(0);
}

/// A draggable point owned by a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handle {
    /// Identifier the host uses to route drags back to this handle.
    pub id: HandleId,
    /// Position in shape-local space.
    pub point: Point,
}

/// A speech bubble: a body placed at `origin` with one tail apex.
///
/// The apex is in body-local space. It is only ever written through the
/// constrained update methods, so it always satisfies the tail length band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeechBubble {
    origin: Point,
    body: Body,
    apex: Point,
    params: BubbleParams,
}

impl SpeechBubble {
    /// Creates a bubble with the default apex: below the body, a quarter of
    /// the width in from the bottom-left corner.
    #[must_use]
    pub fn new(origin: Point, body: Body) -> Self {
        Self::with_params(origin, body, BubbleParams::DEFAULT)
    }

    /// Creates a bubble that uses `params` for all of its geometry.
    #[must_use]
    pub fn with_params(origin: Point, body: Body, params: BubbleParams) -> Self {
        let proposed = Point::new(body.width() * 0.25, body.height() * 1.5);
        Self {
            origin,
            body,
            apex: params.enforce_apex_constraints(&body, proposed),
            params,
        }
    }

    /// Position of the body's top-left corner in the host's space.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The body.
    #[must_use]
    pub fn body(&self) -> Body {
        self.body
    }

    /// The constrained apex, in body-local space.
    #[must_use]
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// The tunables this bubble's geometry is computed with.
    #[must_use]
    pub fn params(&self) -> &BubbleParams {
        &self.params
    }

    /// The draggable handles, for the host's handle registry.
    #[must_use]
    pub fn handles(&self) -> [Handle; 1] {
        [Handle {
            id: HandleId::APEX,
            point: self.apex,
        }]
    }

    /// Moves the bubble without touching its geometry.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Proposes a new apex; the committed apex is the constrained one.
    #[must_use]
    pub fn with_apex(mut self, proposed: Point) -> Self {
        self.apex = self.params.enforce_apex_constraints(&self.body, proposed);
        self
    }

    /// Applies a drag of the apex from `previous` to `current`.
    ///
    /// Both positions are supplied by the caller, typically consecutive
    /// pointer samples in body-local space; the shape keeps no memory of
    /// earlier samples.
    #[must_use]
    pub fn drag_apex(self, previous: Point, current: Point) -> Self {
        let proposed = self.apex + (current - previous);
        self.with_apex(proposed)
    }

    /// Routes a handle update from the host. Unknown handles yield `None`.
    #[must_use]
    pub fn update_handle(self, id: HandleId, point: Point) -> Option<Self> {
        (id == HandleId::APEX).then(|| self.with_apex(point))
    }

    /// Resizes the body, carrying the apex along proportionally.
    #[must_use]
    pub fn resize(mut self, new_body: Body) -> Self {
        let scaled = resize_transform(&self.body, &new_body, self.apex);
        self.body = new_body;
        self.with_apex(scaled)
    }

    /// Resizes and repositions the bubble to fill `bounds` in the host's
    /// space.
    ///
    /// Rectangles with negative extents are normalized first.
    #[must_use]
    pub fn resize_to_rect(self, bounds: Rect) -> Self {
        let bounds = bounds.abs();
        let new_body =
            Body::with_min_extent(bounds.width(), bounds.height(), self.params.min_extent);
        self.resize(new_body).with_origin(bounds.origin())
    }

    /// The current junction.
    #[must_use]
    pub fn junction(&self) -> Option<Junction> {
        self.params.compute_junction(&self.body, self.apex)
    }

    /// The current outline, in body-local space.
    #[must_use]
    pub fn outline(&self) -> Outline {
        self.params.build_outline(&self.body, self.apex)
    }

    /// Bounds of the outline in the host's space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.outline().bounding_box() + self.origin.to_vec2()
    }
}
