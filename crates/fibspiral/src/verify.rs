//! Built-in verification table.
//!
//! Runs a fixed set of generation requests and checks the resulting planar
//! extent and z-range against the requested values, within 1% of the
//! requested scale. This is the acceptance harness for the generator, not a
//! production API: failures are reported on stdout and through the boolean
//! return, never as panics or errors.

use crate::{generate, SpiralParams, Tolerance};

/// `(num_points, scale, turns, height)` verification cases.
const CASES: [(usize, f64, f64, f64); 5] = [
    (100, 100.0, 1.0, 0.0),
    (200, 50.0, 2.0, 0.0),
    (50, 200.0, 0.5, 0.0),
    (100, 100.0, 1.0, 50.0),
    (50, 100.0, 1.0, 25.0),
];

/// Run every verification case, printing a diagnostic for each failure.
///
/// Returns `true` only if all cases pass.
pub fn run() -> bool {
    let mut all_passed = true;

    for &(num_points, scale, turns, height) in &CASES {
        let params = SpiralParams::new(num_points)
            .with_scale(scale)
            .with_turns(turns)
            .with_height(height);

        let spiral = match generate(&params) {
            Ok(spiral) => spiral,
            Err(err) => {
                println!("Verification case {:?} failed to generate: {}", params, err);
                all_passed = false;
                continue;
            }
        };

        // Both checks use the same band: 1% of the requested scale.
        let tolerance = Tolerance::DEFAULT.relative * scale;

        let bounds = spiral.planar_bounds();
        let max_dimension = bounds.max_dimension();
        if (max_dimension - scale).abs() > tolerance {
            println!(
                "Verification failed for scale={}, turns={}, height={}",
                scale, turns, height
            );
            println!("  expected max dimension: {}", scale);
            println!("  actual max dimension:   {}", max_dimension);
            println!("  bounding box: {} x {}", bounds.width(), bounds.height());
            all_passed = false;
            continue;
        }

        if height > 0.0 {
            let (min_z, max_z) = spiral.z_range().unwrap_or((0.0, 0.0));
            let actual_height = max_z - min_z;
            if (actual_height - height).abs() > tolerance {
                println!("Verification failed for height={}", height);
                println!("  expected height: {}", height);
                println!("  actual height:   {}", actual_height);
                println!("  z range: {} to {}", min_z, max_z);
                all_passed = false;
            }
        }
    }

    if all_passed {
        println!("All verification cases passed");
    }
    all_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_table_passes() {
        assert!(run());
    }
}
