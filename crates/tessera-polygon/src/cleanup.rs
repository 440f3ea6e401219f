//! Boundary loop cleanup: duplicate and closing-point removal.

use glam::DVec3;
use tessera_math::{EPSILON10, dvec3_equals_epsilon};

use crate::error::{PipelineError, Result};

/// Remove degenerate points from a boundary loop.
///
/// Drops every point equal (within tolerance) to its immediate predecessor,
/// and the last point when it coincides with the first (an explicitly closed
/// loop). Relative order of the survivors is preserved, and cleaning an
/// already-clean loop is a no-op.
///
/// Fails with [`PipelineError::InvalidArgument`] when fewer than three points
/// are given. It does not fail when fewer than three points survive; that is
/// the triangulation stage's precondition, checked by the caller.
pub fn clean_up(positions: &[DVec3]) -> Result<Vec<DVec3>> {
    if positions.len() < 3 {
        return Err(PipelineError::InvalidArgument(
            "at least three positions are required",
        ));
    }

    let mut cleaned: Vec<DVec3> = Vec::with_capacity(positions.len());
    for &p in positions {
        if let Some(&previous) = cleaned.last() {
            if dvec3_equals_epsilon(p, previous, EPSILON10) {
                continue;
            }
        }
        cleaned.push(p);
    }

    // Drop the closing duplicate of an explicitly closed loop.
    if cleaned.len() > 1 && dvec3_equals_epsilon(cleaned[0], cleaned[cleaned.len() - 1], EPSILON10)
    {
        cleaned.pop();
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(v: f64) -> DVec3 {
        DVec3::splat(v)
    }

    #[test]
    fn test_removes_adjacent_duplicates() {
        let cleaned = clean_up(&[p(1.0), p(2.0), p(2.0), p(3.0)]).unwrap();
        assert_eq!(cleaned, vec![p(1.0), p(2.0), p(3.0)]);
    }

    #[test]
    fn test_removes_closing_duplicate() {
        let cleaned = clean_up(&[p(1.0), p(2.0), p(3.0), p(1.0)]).unwrap();
        assert_eq!(cleaned, vec![p(1.0), p(2.0), p(3.0)]);
    }

    #[test]
    fn test_clean_loop_is_untouched() {
        let input = vec![p(1.0), p(2.0), p(3.0), p(4.0)];
        let cleaned = clean_up(&input).unwrap();
        assert_eq!(cleaned, input);

        // Idempotence: cleaning again changes nothing.
        assert_eq!(clean_up(&cleaned).unwrap(), cleaned);
    }

    #[test]
    fn test_no_cyclically_adjacent_duplicates_remain() {
        let cleaned =
            clean_up(&[p(1.0), p(1.0), p(2.0), p(2.0), p(3.0), p(3.0), p(1.0)]).unwrap();
        let n = cleaned.len();
        for i in 0..n {
            assert!(!dvec3_equals_epsilon(cleaned[i], cleaned[(i + 1) % n], EPSILON10));
        }
        assert_eq!(cleaned, vec![p(1.0), p(2.0), p(3.0)]);
    }

    #[test]
    fn test_under_three_points_is_invalid_argument() {
        assert_eq!(
            clean_up(&[p(1.0), p(2.0)]),
            Err(PipelineError::InvalidArgument(
                "at least three positions are required"
            ))
        );
    }

    #[test]
    fn test_may_return_fewer_than_three_survivors() {
        // All points collapse to one; not an error at this stage.
        let cleaned = clean_up(&[p(1.0), p(1.0), p(1.0)]).unwrap();
        assert_eq!(cleaned, vec![p(1.0)]);
    }
}
