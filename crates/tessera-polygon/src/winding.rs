//! Signed polygon area and winding order classification.

use glam::DVec2;

use crate::error::{PipelineError, Result};

/// Rotational direction of a polygon boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindingOrder {
    /// Negative signed area.
    Clockwise,
    /// Positive signed area.
    CounterClockwise,
}

/// Signed area of a simple 2D polygon via the shoelace formula.
///
/// Positive for counter-clockwise boundaries, negative for clockwise. Fails
/// with [`PipelineError::InvalidArgument`] for fewer than three points.
pub fn compute_area_2d(points: &[DVec2]) -> Result<f64> {
    if points.len() < 3 {
        return Err(PipelineError::InvalidArgument(
            "at least three points are required to compute an area",
        ));
    }

    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    Ok(sum * 0.5)
}

/// Classify the winding order of a simple 2D polygon.
///
/// A thin classification over the sign of [`compute_area_2d`].
pub fn compute_winding_order_2d(points: &[DVec2]) -> Result<WindingOrder> {
    let area = compute_area_2d(points)?;
    if area >= 0.0 {
        Ok(WindingOrder::CounterClockwise)
    } else {
        Ok(WindingOrder::Clockwise)
    }
}
