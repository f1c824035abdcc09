//! The generated point sequence and its measurement helpers.

use fibspiral_math::{Bounds2, Point3};

/// An ordered spiral point sequence.
///
/// Index 0 is the spiral's innermost point (angle 0); later indices advance
/// monotonically in angle and, for lofted spirals, in z. The sequence is
/// immutable after construction; callers consume it to build a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralSequence {
    points: Vec<Point3>,
}

impl SpiralSequence {
    /// Wrap an ordered point list.
    pub(crate) fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Number of points in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the sequence holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in generation order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// Axis-aligned bounding box of the planar (x, y) coordinates.
    ///
    /// An empty sequence yields the empty (inverted) box, whose extents
    /// measure as zero.
    pub fn planar_bounds(&self) -> Bounds2 {
        let mut bounds = Bounds2::empty();
        for p in &self.points {
            bounds.include(p.x, p.y);
        }
        bounds
    }

    /// Minimum and maximum z coordinate, or `None` for an empty sequence.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter();
        let first = iter.next()?.z;
        let (min_z, max_z) = iter.fold((first, first), |(lo, hi), p| {
            (lo.min(p.z), hi.max(p.z))
        });
        Some((min_z, max_z))
    }
}

impl IntoIterator for SpiralSequence {
    type Item = Point3;
    type IntoIter = std::vec::IntoIter<Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpiralSequence {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_measurements() {
        let seq = SpiralSequence::new(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.planar_bounds().max_dimension(), 0.0);
        assert_eq!(seq.z_range(), None);
    }

    #[test]
    fn test_bounds_and_z_range() {
        let seq = SpiralSequence::new(vec![
            Point3::new(-1.0, 2.0, 0.0),
            Point3::new(3.0, -4.0, 1.5),
            Point3::new(0.0, 0.0, 0.5),
        ]);
        let b = seq.planar_bounds();
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 6.0);
        assert_eq!(b.max_dimension(), 6.0);
        assert_eq!(seq.z_range(), Some((0.0, 1.5)));
    }
}
