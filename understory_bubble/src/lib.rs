// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Bubble: speech bubble outline geometry.
//!
//! A speech bubble is an axis-aligned rectangular body plus a triangular tail
//! pointing at a user-draggable apex. This crate computes where the tail
//! meets the body, keeps the apex a sensible distance away, and assembles the
//! closed outline that is both drawn and hit tested.
//!
//! - **Junction** ([`compute_junction`], [`Junction`]): casts the segment
//!   from the apex to the body center, finds the edge it crosses, and slides
//!   the crossing towards the edge's middle and away from its corners.
//! - **Apex constraints** ([`enforce_apex_constraints`]): relocates an apex
//!   that is inside the body, too close to it, or too far from it. The
//!   result is stable under repeated application.
//! - **Outline** ([`build_outline`], [`Outline`]): the body corners with the
//!   tail spliced in, as vertices, a [`kurbo::BezPath`], or SVG path data.
//! - **Resize** ([`resize_transform`]): carries the apex along when the body
//!   changes size.
//! - **Shape** ([`SpeechBubble`]): an immutable record tying the above
//!   together for hosts that want a ready-made shape with a handle.
//!
//! All coordinates are body-local: the body spans `(0, 0)` to
//! `(width, height)` with `y` growing downwards.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_bubble::{Body, Edge, build_outline, compute_junction, enforce_apex_constraints};
//!
//! let body = Body::new(100.0, 130.0);
//!
//! // Dragged far to the lower right: pulled back in along its direction.
//! let apex = enforce_apex_constraints(&body, Point::new(180.0, 180.0));
//! let junction = compute_junction(&body, apex).unwrap();
//! assert_eq!(junction.edge, Edge::Right);
//! assert!(!junction.inside_body);
//!
//! // Four corners plus shoulder, apex, shoulder.
//! let outline = build_outline(&body, apex);
//! assert_eq!(outline.vertices().len(), 7);
//! assert_eq!(outline.vertices()[3], apex);
//! ```
//!
//! ## Tunables
//!
//! The free functions use [`BubbleParams::DEFAULT`]. Every operation is also
//! available as a method on [`BubbleParams`] for hosts that want a different
//! tail width, corner clearance, or distance band:
//!
//! ```rust
//! use kurbo::Point;
//! use understory_bubble::{Body, BubbleParams};
//!
//! let params = BubbleParams::DEFAULT
//!     .with_offset_divisor(6.0)
//!     .with_distance_divisors(4.0, 2.0);
//! params.validate().unwrap();
//!
//! let body = Body::new(120.0, 80.0);
//! let outline = params.build_outline(&body, Point::new(30.0, 130.0));
//! assert!(outline.has_tail());
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Disable default features and
//! enable `libm` to build without `std`.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std` and enables [`Outline::to_svg`].
//! - `libm`: forwards to `kurbo/libm` for `no_std` float math.
//! - `tracing`: emits `tracing` events when an apex is relocated or an
//!   outline falls back to the plain rectangle.

#![no_std]

extern crate alloc;

mod log;

mod body;
mod constrain;
mod intersect;
mod junction;
pub mod math;
mod outline;
mod params;
mod resize;
mod shape;

pub use body::{Body, Edge};
pub use intersect::{RayHit, cast_to_boundary};
pub use junction::Junction;
pub use outline::{HitKind, HitParams, HitScore, Outline, TAILED_VERTEX_COUNT};
pub use params::{
    BubbleParams, CENTER_BIAS_BLEND, CENTER_BIAS_EXPONENT, CORNER_CLEARANCE, EDGE_SNAP_TOLERANCE,
    MAX_DISTANCE_DIVISOR, MIN_DISTANCE_DIVISOR, MIN_EXTENT, OFFSET_DIVISOR, ParamsError,
};
pub use resize::{resize_ratios, resize_transform};
pub use shape::{Handle, HandleId, SpeechBubble};

use kurbo::Point;

/// Computes the tail junction for `apex` on `body` with the default tunables.
///
/// See [`BubbleParams::compute_junction`].
#[must_use]
pub fn compute_junction(body: &Body, apex: Point) -> Option<Junction> {
    BubbleParams::DEFAULT.compute_junction(body, apex)
}

/// Constrains a proposed apex with the default tunables.
///
/// See [`BubbleParams::enforce_apex_constraints`].
#[must_use]
pub fn enforce_apex_constraints(body: &Body, proposed: Point) -> Point {
    BubbleParams::DEFAULT.enforce_apex_constraints(body, proposed)
}

/// Builds the bubble outline with the default tunables.
///
/// See [`BubbleParams::build_outline`].
#[must_use]
pub fn build_outline(body: &Body, apex: Point) -> Outline {
    BubbleParams::DEFAULT.build_outline(body, apex)
}
