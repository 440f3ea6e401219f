//! Floating-point tolerance constants and epsilon comparisons.
//!
//! Geometric stages never raise errors on float edge cases (collinear points,
//! zero-length edges); they compare within these tolerances instead.

use glam::{DVec2, DVec3};

/// Tolerance for texture-coordinate and area comparisons.
pub const EPSILON6: f64 = 1e-6;
/// Tolerance for angular comparisons in radians.
pub const EPSILON7: f64 = 1e-7;
/// Tolerance for positional equality of boundary points.
pub const EPSILON10: f64 = 1e-10;
/// Tolerance near the limit of f64 precision, for unit-scale geometry.
pub const EPSILON14: f64 = 1e-14;

/// Scalar equality within an absolute tolerance.
#[inline]
#[must_use]
pub fn equals_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Per-component 2D vector equality within an absolute tolerance.
#[inline]
#[must_use]
pub fn dvec2_equals_epsilon(a: DVec2, b: DVec2, epsilon: f64) -> bool {
    equals_epsilon(a.x, b.x, epsilon) && equals_epsilon(a.y, b.y, epsilon)
}

/// Per-component 3D vector equality within an absolute tolerance.
#[inline]
#[must_use]
pub fn dvec3_equals_epsilon(a: DVec3, b: DVec3, epsilon: f64) -> bool {
    equals_epsilon(a.x, b.x, epsilon)
        && equals_epsilon(a.y, b.y, epsilon)
        && equals_epsilon(a.z, b.z, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_epsilon_inside_and_outside_tolerance() {
        assert!(equals_epsilon(1.0, 1.0 + 1e-11, EPSILON10));
        assert!(!equals_epsilon(1.0, 1.0 + 1e-9, EPSILON10));
    }

    #[test]
    fn test_vector_equality_checks_every_component() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        assert!(dvec3_equals_epsilon(a, a, EPSILON14));
        assert!(!dvec3_equals_epsilon(a, DVec3::new(1.0, 2.0, 3.1), EPSILON10));
        assert!(dvec2_equals_epsilon(
            DVec2::new(0.5, -0.5),
            DVec2::new(0.5 + 1e-12, -0.5),
            EPSILON10
        ));
    }
}
