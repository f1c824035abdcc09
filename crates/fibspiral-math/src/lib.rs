#![warn(missing_docs)]

//! Math types for the fibspiral generator.
//!
//! Thin wrappers around nalgebra providing the domain-specific types the
//! spiral generator needs: 3D points, a planar bounding box accumulated
//! point-by-point, and a relative tolerance for dimension checks.

use nalgebra::Vector2;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A point in the sketch (XY) plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the sketch (XY) plane.
pub type Vec2 = Vector2<f64>;

/// Axis-aligned bounding box in the XY plane.
///
/// Starts inverted (`empty`) and grows as points are included, so it can be
/// accumulated in a single pass over generated coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl Bounds2 {
    /// Create an empty (inverted) box suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expand this box to include `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Extent along x. Zero for an empty or single-point box.
    pub fn width(&self) -> f64 {
        if self.min_x > self.max_x {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Extent along y. Zero for an empty or single-point box.
    pub fn height(&self) -> f64 {
        if self.min_y > self.max_y {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// The larger of the two planar extents.
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::empty()
    }
}

/// Relative tolerance for comparing a measured dimension against a requested
/// one.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Allowed deviation as a fraction of the expected value.
    pub relative: f64,
}

impl Tolerance {
    /// Default tolerance: 1% of the expected dimension.
    pub const DEFAULT: Self = Self { relative: 0.01 };

    /// Check that `actual` is within the tolerance of `expected`.
    ///
    /// The allowed band scales with `expected`, so `within(0.0, 0.0)` holds
    /// exactly and nothing else is within tolerance of zero.
    pub fn within(&self, actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= self.relative * expected.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
