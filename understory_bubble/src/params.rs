// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Half-width of the band around `0`, the width, and the height inside which
/// a boundary point is treated as lying on that edge.
pub const EDGE_SNAP_TOLERANCE: f64 = 4.0;

/// An edge's length divided by this gives the tail offset: the half-width of
/// the tail's base and the unit of corner clearance.
pub const OFFSET_DIVISOR: f64 = 10.0;

/// Minimum distance between the junction and a corner, in tail offsets.
pub const CORNER_CLEARANCE: f64 = 2.5;

/// How far the junction is blended from the clearance-constrained position
/// towards the center-biased one.
pub const CENTER_BIAS_BLEND: f64 = 0.4;

/// Exponent applied to the junction's signed distance from the edge midpoint.
pub const CENTER_BIAS_EXPONENT: f64 = 2.0;

/// The body diagonal divided by this is the shortest allowed tail.
pub const MIN_DISTANCE_DIVISOR: f64 = 5.0;

/// The body diagonal divided by this is the longest allowed tail.
pub const MAX_DISTANCE_DIVISOR: f64 = 1.5;

/// Smallest extent a body may have.
pub const MIN_EXTENT: f64 = 1e-3;

/// Tunables for the tail geometry.
///
/// [`BubbleParams::DEFAULT`] holds the stock values. Fields are public so
/// hosts can tweak them directly; [`BubbleParams::validate`] reports
/// combinations that would produce inverted ranges.
///
/// The geometry operations are methods on this type; the free functions at
/// the crate root use [`BubbleParams::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleParams {
    /// See [`EDGE_SNAP_TOLERANCE`].
    pub edge_snap_tolerance: f64,
    /// See [`OFFSET_DIVISOR`].
    pub offset_divisor: f64,
    /// See [`CORNER_CLEARANCE`].
    pub corner_clearance: f64,
    /// See [`CENTER_BIAS_BLEND`].
    pub center_bias_blend: f64,
    /// See [`CENTER_BIAS_EXPONENT`].
    pub center_bias_exponent: f64,
    /// See [`MIN_DISTANCE_DIVISOR`].
    pub min_distance_divisor: f64,
    /// See [`MAX_DISTANCE_DIVISOR`].
    pub max_distance_divisor: f64,
    /// See [`MIN_EXTENT`].
    pub min_extent: f64,
}

impl BubbleParams {
    /// The stock tunables.
    pub const DEFAULT: Self = Self {
        edge_snap_tolerance: EDGE_SNAP_TOLERANCE,
        offset_divisor: OFFSET_DIVISOR,
        corner_clearance: CORNER_CLEARANCE,
        center_bias_blend: CENTER_BIAS_BLEND,
        center_bias_exponent: CENTER_BIAS_EXPONENT,
        min_distance_divisor: MIN_DISTANCE_DIVISOR,
        max_distance_divisor: MAX_DISTANCE_DIVISOR,
        min_extent: MIN_EXTENT,
    };

    /// Returns `params` if it passes [`BubbleParams::validate`].
    pub fn try_new(params: Self) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(params)
    }

    /// Sets the edge classification tolerance.
    #[must_use]
    pub fn with_edge_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.edge_snap_tolerance = tolerance;
        self
    }

    /// Sets the tail offset divisor.
    #[must_use]
    pub fn with_offset_divisor(mut self, divisor: f64) -> Self {
        self.offset_divisor = divisor;
        self
    }

    /// Sets the corner clearance, in tail offsets.
    #[must_use]
    pub fn with_corner_clearance(mut self, clearance: f64) -> Self {
        self.corner_clearance = clearance;
        self
    }

    /// Sets the center bias blend factor and exponent.
    #[must_use]
    pub fn with_center_bias(mut self, blend: f64, exponent: f64) -> Self {
        self.center_bias_blend = blend;
        self.center_bias_exponent = exponent;
        self
    }

    /// Sets the divisors of the body diagonal that bound the tail length.
    #[must_use]
    pub fn with_distance_divisors(mut self, min_divisor: f64, max_divisor: f64) -> Self {
        self.min_distance_divisor = min_divisor;
        self.max_distance_divisor = max_divisor;
        self
    }

    /// Sets the smallest extent a body may have.
    #[must_use]
    pub fn with_min_extent(mut self, min_extent: f64) -> Self {
        self.min_extent = min_extent;
        self
    }

    /// Checks that every tunable is finite and that the derived ranges are
    /// well formed.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("edge_snap_tolerance", self.edge_snap_tolerance),
            ("offset_divisor", self.offset_divisor),
            ("corner_clearance", self.corner_clearance),
            ("center_bias_blend", self.center_bias_blend),
            ("center_bias_exponent", self.center_bias_exponent),
            ("min_distance_divisor", self.min_distance_divisor),
            ("max_distance_divisor", self.max_distance_divisor),
            ("min_extent", self.min_extent),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParamsError::NonFinite { name });
        }

        let out_of_range = |name: &'static str, value: f64| ParamsError::OutOfRange { name, value };
        if self.edge_snap_tolerance < 0.0 {
            return Err(out_of_range("edge_snap_tolerance", self.edge_snap_tolerance));
        }
        if self.offset_divisor <= 0.0 {
            return Err(out_of_range("offset_divisor", self.offset_divisor));
        }
        if self.corner_clearance < 0.0 {
            return Err(out_of_range("corner_clearance", self.corner_clearance));
        }
        if !(0.0..=1.0).contains(&self.center_bias_blend) {
            return Err(out_of_range("center_bias_blend", self.center_bias_blend));
        }
        if self.center_bias_exponent <= 0.0 {
            return Err(out_of_range(
                "center_bias_exponent",
                self.center_bias_exponent,
            ));
        }
        if self.min_distance_divisor <= 0.0 {
            return Err(out_of_range(
                "min_distance_divisor",
                self.min_distance_divisor,
            ));
        }
        if self.max_distance_divisor <= 0.0 {
            return Err(out_of_range(
                "max_distance_divisor",
                self.max_distance_divisor,
            ));
        }
        if self.min_extent <= 0.0 {
            return Err(out_of_range("min_extent", self.min_extent));
        }
        if 2.0 * self.corner_clearance >= self.offset_divisor {
            return Err(ParamsError::ClearanceTooWide);
        }
        // A larger divisor is a shorter distance.
        if self.min_distance_divisor <= self.max_distance_divisor {
            return Err(ParamsError::DistanceBandInverted);
        }
        Ok(())
    }

    /// Tail offset for an edge of the given length.
    #[must_use]
    pub fn offset_for(&self, edge_length: f64) -> f64 {
        edge_length / self.offset_divisor
    }

    /// Shortest allowed distance between apex and junction for a body with
    /// the given diagonal.
    #[must_use]
    pub fn min_distance(&self, diagonal: f64) -> f64 {
        diagonal / self.min_distance_divisor
    }

    /// Longest allowed distance between apex and junction for a body with
    /// the given diagonal.
    #[must_use]
    pub fn max_distance(&self, diagonal: f64) -> f64 {
        diagonal / self.max_distance_divisor
    }
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a [`BubbleParams`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamsError {
    /// A tunable is NaN or infinite.
    NonFinite {
        /// Field name.
        name: &'static str,
    },
    /// A tunable lies outside its legal range.
    OutOfRange {
        /// Field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The corner clearance leaves no room on an edge for the junction.
    ClearanceTooWide,
    /// The minimum tail length is not shorter than the maximum.
    DistanceBandInverted,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name } => write!(f, "`{name}` must be finite"),
            Self::OutOfRange { name, value } => {
                write!(f, "`{name}` is out of range: {value}")
            }
            Self::ClearanceTooWide => f.write_str(
                "corner clearance must be less than half the offset divisor",
            ),
            Self::DistanceBandInverted => f.write_str(
                "min distance divisor must be greater than max distance divisor",
            ),
        }
    }
}

impl core::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults_validate() {
        assert_eq!(BubbleParams::default(), BubbleParams::DEFAULT);
        assert_eq!(BubbleParams::DEFAULT.validate(), Ok(()));
        assert!(BubbleParams::try_new(BubbleParams::DEFAULT).is_ok());
    }

    #[test]
    fn non_finite_is_rejected_by_name() {
        let params = BubbleParams::DEFAULT.with_center_bias(f64::NAN, 2.0);
        assert_eq!(
            params.validate(),
            Err(ParamsError::NonFinite {
                name: "center_bias_blend"
            })
        );
    }

    #[test]
    fn blend_outside_unit_interval_is_rejected() {
        let params = BubbleParams::DEFAULT.with_center_bias(1.5, 2.0);
        assert_eq!(
            params.validate(),
            Err(ParamsError::OutOfRange {
                name: "center_bias_blend",
                value: 1.5
            })
        );
    }

    #[test]
    fn wide_clearance_is_rejected() {
        let params = BubbleParams::DEFAULT.with_corner_clearance(5.0);
        assert_eq!(params.validate(), Err(ParamsError::ClearanceTooWide));
        let params = BubbleParams::DEFAULT.with_corner_clearance(4.9);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn inverted_distance_band_is_rejected() {
        let params = BubbleParams::DEFAULT.with_distance_divisors(1.5, 5.0);
        assert_eq!(params.validate(), Err(ParamsError::DistanceBandInverted));
    }

    #[test]
    fn derived_lengths() {
        let params = BubbleParams::DEFAULT;
        assert_eq!(params.offset_for(100.0), 10.0);
        assert_eq!(params.min_distance(150.0), 30.0);
        assert_eq!(params.max_distance(150.0), 100.0);
    }

    #[test]
    fn errors_display() {
        let err = ParamsError::OutOfRange {
            name: "offset_divisor",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "`offset_divisor` is out of range: -1");
    }
}
