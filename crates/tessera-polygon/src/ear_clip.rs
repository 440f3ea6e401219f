//! Ear-clipping triangulation of simple 2D polygons.

use glam::DVec2;

use crate::error::{PipelineError, Result};

/// 2D cross product of the edge vectors meeting at `p1`.
#[inline]
fn tip_cross(p0: DVec2, p1: DVec2, p2: DVec2) -> f64 {
    let u = p1 - p0;
    let v = p2 - p1;
    u.x * v.y - u.y * v.x
}

/// Strictly-inside test via barycentric coordinates.
///
/// Boundary points count as outside, so a reflex vertex touching an ear's
/// edge does not disqualify it.
fn point_inside_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denominator = dot00 * dot11 - dot01 * dot01;
    if denominator == 0.0 {
        // Degenerate triangle encloses nothing.
        return false;
    }
    let q = 1.0 / denominator;
    let u = (dot11 * dot02 - dot01 * dot12) * q;
    let v = (dot00 * dot12 - dot01 * dot02) * q;
    u > 0.0 && v > 0.0 && u + v < 1.0
}

/// Triangulate a simple counter-clockwise polygon by ear clipping.
///
/// Handles convex and concave boundaries; holes and self-intersections are
/// out of scope. Returns a triangle index list in original-array terms, with
/// exactly `n - 2` triangles for an `n`-vertex polygon.
///
/// The scan is deterministic: a working list of remaining vertices is walked
/// cyclically, testing the middle vertex of each consecutive triple. The
/// earliest qualifying ear wins; after clipping, the scan resumes at the same
/// leading vertex. The final three vertices are emitted in working-list
/// order.
///
/// Fails with [`PipelineError::InvalidArgument`] for fewer than three points,
/// and with [`PipelineError::MalformedPolygon`] when a full cycle over the
/// remaining vertices yields no ear (self-intersecting or degenerate input).
pub fn ear_clip_2d(points: &[DVec2]) -> Result<Vec<u32>> {
    if points.len() < 3 {
        return Err(PipelineError::InvalidArgument(
            "at least three points are required for triangulation",
        ));
    }

    let mut remaining: Vec<u32> = (0..points.len() as u32).collect();
    let mut indices: Vec<u32> = Vec::with_capacity(3 * (points.len() - 2));

    let mut cursor = 0;
    let mut stalled_for = 0;
    while remaining.len() > 3 {
        let n = remaining.len();
        let i0 = cursor;
        let i1 = (cursor + 1) % n;
        let i2 = (cursor + 2) % n;

        let p0 = points[remaining[i0] as usize];
        let p1 = points[remaining[i1] as usize];
        let p2 = points[remaining[i2] as usize];

        let is_ear = tip_cross(p0, p1, p2) >= 0.0
            && !remaining.iter().enumerate().any(|(k, &index)| {
                k != i0
                    && k != i1
                    && k != i2
                    && point_inside_triangle(points[index as usize], p0, p1, p2)
            });

        if is_ear {
            indices.extend_from_slice(&[remaining[i0], remaining[i1], remaining[i2]]);
            remaining.remove(i1);
            if i1 < cursor {
                cursor -= 1;
            }
            stalled_for = 0;
        } else {
            cursor = (cursor + 1) % n;
            stalled_for += 1;
            if stalled_for >= n {
                return Err(PipelineError::MalformedPolygon);
            }
        }
    }

    indices.extend_from_slice(&remaining);
    Ok(indices)
}
