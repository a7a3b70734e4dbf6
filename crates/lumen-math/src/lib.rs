#![warn(missing_docs)]

//! Math types for the lumen render kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! ray tracing geometry: points, vectors, unit directions, and the
//! epsilon constants shared by the intersection routines.
//!
//! Points are affine locations; vectors are free displacements. The two
//! share a representation but not an algebra: `Point3 - Point3` yields a
//! `Vec3`, `Point3 + Vec3` yields a `Point3`, and points cannot be added
//! to each other. nalgebra enforces this distinction at the type level.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
///
/// Constructing one via [`nalgebra::Unit::new_normalize`] rescales the
/// input to unit length. A zero-length input divides by zero and yields
/// non-finite components; callers must not normalize a zero vector.
pub type Dir3 = Unit<Vector3<f64>>;

/// Default minimum ray parameter.
///
/// Rays start slightly in front of their origin so that a ray spawned
/// from a surface does not immediately re-intersect it.
pub const RAY_EPSILON: f64 = 1e-4;

/// Determinant threshold below which a ray is treated as parallel to a
/// triangle's plane.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
}

impl Tolerance {
    /// Default render-kernel tolerance (1e-9 linear).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{abs_diff_eq, relative_eq};

    #[test]
    fn test_point_vector_algebra() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 8.0);
        let v = q - p;
        assert!(relative_eq!(v, Vec3::new(3.0, 4.0, 5.0)));
        assert!(Tolerance::DEFAULT.points_equal(&(p + v), &q));
        assert!(Tolerance::DEFAULT.points_equal(&(q - v), &p));
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert!(relative_eq!(v.normalize().norm(), 1.0));
        let d = Dir3::new_normalize(v);
        assert!(relative_eq!(d.as_ref().norm(), 1.0));
    }

    #[test]
    fn test_normalize_idempotent() {
        // Unit vectors are fixed points of normalization.
        let once = Vec3::new(1.0, 1.0, 1.0).normalize();
        let twice = once.normalize();
        assert!(relative_eq!(once, twice));
    }

    #[test]
    fn test_dot_commutes() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);
        assert!(relative_eq!(a.dot(&b), b.dot(&a)));
    }

    #[test]
    fn test_cross_anticommutes() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);
        assert!(relative_eq!(a.cross(&b), -b.cross(&a)));
    }

    #[test]
    fn test_cross_orthogonal_to_operands() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);
        let c = a.cross(&b);
        assert!(abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-12));
        assert!(abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-12));
    }

    #[test]
    fn test_cross_right_handed() {
        let c = Vec3::x().cross(&Vec3::y());
        assert!(relative_eq!(c, Vec3::z()));
    }

    #[test]
    fn test_scaling() {
        let v = Vec3::new(1.0, 2.0, 3.0) * 2.0;
        assert!(relative_eq!(v, Vec3::new(2.0, 4.0, 6.0)));
        assert!(relative_eq!(v.norm(), 2.0 * 14.0_f64.sqrt()));
    }

    #[test]
    fn test_zero_vector_normalize_is_non_finite() {
        // Documented hazard: no guard against zero-length input.
        let d = Dir3::new_normalize(Vec3::zeros());
        assert!(!d.as_ref().x.is_finite());
    }
}
