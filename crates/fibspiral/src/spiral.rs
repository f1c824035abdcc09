//! The spiral generator: parameters, validation, and the two-pass
//! generate/normalize computation.

use crate::{SpiralError, SpiralSequence};
use fibspiral_math::{Bounds2, Point3, Vec2};
use std::f64::consts::PI;

/// Parameters for one spiral generation request.
///
/// The spiral is parameterized as:
/// ```text
/// angle(i) = i * 2π * turns / num_points
/// radius(i) = φ ^ (2 * angle(i) / π)        φ = (1 + √5) / 2
/// z(i) = height * i / (num_points - 1)
/// ```
/// before the planar coordinates are rescaled so the larger bounding-box
/// side equals `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Number of points to emit.
    pub num_points: usize,
    /// Target maximum planar bounding-box dimension, in model units.
    pub scale: f64,
    /// Number of full revolutions swept across the sequence.
    pub turns: f64,
    /// Total vertical rise across the sequence; 0 keeps the spiral planar.
    pub height: f64,
}

impl SpiralParams {
    /// Create parameters for `num_points` points with unit scale, one turn,
    /// and no vertical rise.
    pub fn new(num_points: usize) -> Self {
        Self {
            num_points,
            scale: 1.0,
            turns: 1.0,
            height: 0.0,
        }
    }

    /// Set the target planar extent.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the number of revolutions.
    pub fn with_turns(mut self, turns: f64) -> Self {
        self.turns = turns;
        self
    }

    /// Set the total vertical rise.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    fn validate(&self) -> Result<(), SpiralError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(SpiralError::InvalidScale(self.scale));
        }
        if !(self.turns.is_finite() && self.turns > 0.0) {
            return Err(SpiralError::InvalidTurns(self.turns));
        }
        if !(self.height.is_finite() && self.height >= 0.0) {
            return Err(SpiralError::InvalidHeight(self.height));
        }
        Ok(())
    }
}

/// Generate a Fibonacci spiral point sequence.
///
/// Two passes: the first sweeps the angle and accumulates the unscaled
/// coordinates together with their planar bounds; the second rescales every
/// point so the larger bounding-box side equals `params.scale` and ramps the
/// z coordinate linearly from 0 to `params.height` (the last point lands on
/// the full height).
///
/// Degenerate counts are handled without arithmetic faults: zero points
/// yield an empty sequence, and a single point, whose extent would be zero
/// and its scaling undefined, is returned at the origin.
pub fn generate(params: &SpiralParams) -> Result<SpiralSequence, SpiralError> {
    params.validate()?;

    let n = params.num_points;
    if n == 0 {
        return Ok(SpiralSequence::new(Vec::new()));
    }
    if n == 1 {
        return Ok(SpiralSequence::new(vec![Point3::origin()]));
    }

    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle_increment = 2.0 * PI * params.turns / n as f64;

    let mut unscaled = Vec::with_capacity(n);
    let mut bounds = Bounds2::empty();
    for i in 0..n {
        let angle = i as f64 * angle_increment;
        let radius = phi.powf(2.0 * angle / PI);
        let x = radius * angle.cos();
        let y = radius * angle.sin();
        bounds.include(x, y);
        unscaled.push(Vec2::new(x, y));
    }

    // n >= 2 with turns > 0 guarantees a non-degenerate extent.
    let scaling_factor = params.scale / bounds.max_dimension();

    let last = (n - 1) as f64;
    let points = unscaled
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let z = params.height * i as f64 / last;
            Point3::new(p.x * scaling_factor, p.y * scaling_factor, z)
        })
        .collect();

    Ok(SpiralSequence::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibspiral_math::Tolerance;

    fn max_dimension(params: &SpiralParams) -> f64 {
        generate(params).unwrap().planar_bounds().max_dimension()
    }

    #[test]
    fn test_planar_extent_matches_scale() {
        let tol = Tolerance::DEFAULT;
        let cases = [
            SpiralParams::new(100).with_scale(100.0),
            SpiralParams::new(200).with_scale(50.0).with_turns(2.0),
            SpiralParams::new(50).with_scale(200.0).with_turns(0.5),
        ];
        for params in cases {
            let dim = max_dimension(&params);
            assert!(
                tol.within(dim, params.scale),
                "extent {} vs requested {}",
                dim,
                params.scale
            );
        }
    }

    #[test]
    fn test_flat_spiral_has_zero_z() {
        let spiral = generate(&SpiralParams::new(100).with_scale(100.0)).unwrap();
        assert!(spiral.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_lofted_spiral_z_ramp() {
        let params = SpiralParams::new(100).with_scale(100.0).with_height(50.0);
        let spiral = generate(&params).unwrap();

        let (min_z, max_z) = spiral.z_range().unwrap();
        assert_eq!(min_z, 0.0);
        assert!((max_z - 50.0).abs() < 1e-9, "last z {} short of height", max_z);

        let zs: Vec<f64> = spiral.iter().map(|p| p.z).collect();
        assert!(zs.windows(2).all(|w| w[1] >= w[0]), "z must be non-decreasing");
    }

    #[test]
    fn test_sequence_length() {
        for n in [0usize, 1, 2, 10, 1000] {
            let spiral = generate(&SpiralParams::new(n)).unwrap();
            assert_eq!(spiral.len(), n);
        }
    }

    #[test]
    fn test_single_point_at_origin() {
        let params = SpiralParams::new(1).with_scale(100.0).with_height(50.0);
        let spiral = generate(&params).unwrap();
        assert_eq!(spiral.len(), 1);
        let p = spiral.points()[0];
        assert_eq!((p.x, p.y, p.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_first_point_is_innermost() {
        let spiral = generate(&SpiralParams::new(100).with_scale(100.0)).unwrap();
        let p0 = spiral.points()[0];
        // Angle 0, radius φ^0 scaled: on the positive x axis.
        assert_eq!(p0.y, 0.0);
        assert!(p0.x > 0.0);
        let r0 = p0.x.hypot(p0.y);
        for p in spiral.iter().skip(1) {
            assert!(p.x.hypot(p.y) > r0);
        }
    }

    #[test]
    fn test_polar_angle_is_non_decreasing() {
        let params = SpiralParams::new(400).with_scale(10.0).with_turns(3.0);
        let spiral = generate(&params).unwrap();

        // Unwrap atan2: a step is a wrap over the ±π cut, not a regression,
        // only when it jumps by more than π.
        let mut total = spiral.points()[0].y.atan2(spiral.points()[0].x);
        let mut prev_raw = total;
        for (i, p) in spiral.iter().enumerate().skip(1) {
            let raw = p.y.atan2(p.x);
            let mut step = raw - prev_raw;
            if step < -PI {
                step += 2.0 * PI;
            }
            assert!(step >= 0.0, "angle regressed at index {}", i);
            total += step;
            prev_raw = raw;
        }
        // Three turns swept (last point one increment short of the full sweep).
        assert!(total > 2.0 * PI * 2.9);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = SpiralParams::new(128)
            .with_scale(42.0)
            .with_turns(1.5)
            .with_height(7.0);
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let base = SpiralParams::new(10);
        assert_eq!(
            generate(&base.with_scale(0.0)),
            Err(SpiralError::InvalidScale(0.0))
        );
        assert_eq!(
            generate(&base.with_scale(-1.0)),
            Err(SpiralError::InvalidScale(-1.0))
        );
        assert_eq!(
            generate(&base.with_turns(-2.0)),
            Err(SpiralError::InvalidTurns(-2.0))
        );
        assert_eq!(
            generate(&base.with_height(-0.5)),
            Err(SpiralError::InvalidHeight(-0.5))
        );
        assert!(generate(&base.with_scale(f64::NAN)).is_err());
        assert!(generate(&base.with_turns(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validation_applies_to_degenerate_counts_too() {
        assert!(generate(&SpiralParams::new(0).with_scale(-1.0)).is_err());
        assert!(generate(&SpiralParams::new(1).with_turns(0.0)).is_err());
    }
}
