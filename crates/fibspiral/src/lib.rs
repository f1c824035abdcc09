#![warn(missing_docs)]

//! Logarithmic ("Fibonacci") spiral point generation.
//!
//! Generates an ordered sequence of 3D points along a golden-ratio spiral,
//! rescaled so the larger side of its planar bounding box matches a requested
//! extent, and optionally lofted along Z to a requested height. The
//! computation is pure and synchronous; the caller (typically a CAD host or
//! the bundled CLI) turns the points into a curve.
//!
//! # Example
//!
//! ```
//! use fibspiral::{generate, SpiralParams};
//!
//! let params = SpiralParams::new(100).with_scale(100.0).with_turns(2.0);
//! let spiral = generate(&params).unwrap();
//! assert_eq!(spiral.len(), 100);
//! assert!((spiral.planar_bounds().max_dimension() - 100.0).abs() < 1.0);
//! ```

mod sequence;
mod spiral;
pub mod verify;

pub use sequence::SpiralSequence;
pub use spiral::{generate, SpiralParams};

pub use fibspiral_math::{Bounds2, Point3, Tolerance};

use thiserror::Error;

/// Errors from spiral generation.
///
/// All variants are input rejections; generation itself cannot fail once the
/// parameters are accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpiralError {
    /// Scale must be a positive, finite extent.
    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    /// Turns must be a positive, finite revolution count. Reversed winding
    /// via a negative value is not supported.
    #[error("turns must be positive and finite, got {0}")]
    InvalidTurns(f64),

    /// Height must be a non-negative, finite rise.
    #[error("height must be non-negative and finite, got {0}")]
    InvalidHeight(f64),
}
