//! Geodesic subdivision: split triangles until no edge subtends more than the
//! granularity angle at the ellipsoid center.

use glam::DVec3;
use hashbrown::HashMap;
use tessera_math::{EPSILON10, Ellipsoid};

use crate::error::{PipelineError, Result};
use crate::mesh::Mesh;

/// One pending triangle in the subdivision work queue, by vertex index.
#[derive(Clone, Copy, Debug)]
struct SubdivisionTriangle {
    i0: u32,
    i1: u32,
    i2: u32,
}

/// Position-keyed lookup of already-created subdivision vertices.
///
/// Adjacent triangles split along a shared edge must reuse the same midpoint
/// vertex, or the mesh cracks along that edge. Quantizing positions to a cell
/// far below the smallest achievable edge length buckets coincident midpoints
/// onto one key.
struct VertexArena {
    positions: Vec<DVec3>,
    by_position: HashMap<[i64; 3], u32>,
    inverse_cell: f64,
}

fn quantize(p: DVec3, inverse_cell: f64) -> [i64; 3] {
    [
        (p.x * inverse_cell).round() as i64,
        (p.y * inverse_cell).round() as i64,
        (p.z * inverse_cell).round() as i64,
    ]
}

impl VertexArena {
    fn new(positions: &[DVec3], ellipsoid: &Ellipsoid) -> Self {
        let inverse_cell = 1.0 / (ellipsoid.maximum_radius() * EPSILON10);
        let mut by_position = HashMap::with_capacity(positions.len() * 2);
        for (i, &p) in positions.iter().enumerate() {
            by_position.insert(quantize(p, inverse_cell), i as u32);
        }
        Self {
            positions: positions.to_vec(),
            by_position,
            inverse_cell,
        }
    }

    /// Index of the vertex at `p`, inserting it if unseen.
    fn intern(&mut self, p: DVec3) -> u32 {
        let key = quantize(p, self.inverse_cell);
        if let Some(&index) = self.by_position.get(&key) {
            return index;
        }
        let index = self.positions.len() as u32;
        self.positions.push(p);
        self.by_position.insert(key, index);
        index
    }
}

/// Subdivide triangles so that every edge's angular extent, as seen from the
/// ellipsoid center, is at most `granularity` radians.
///
/// Each oversized triangle is split at the midpoint of its longest edge; the
/// midpoint is repositioned onto the ellipsoid surface along the ray from the
/// center through the Euclidean midpoint, so the new vertices follow the
/// surface curvature. Traversal is iterative with an explicit work queue, and
/// midpoints are deduplicated across triangles through a position-keyed
/// arena.
///
/// Triangles already within the granularity pass through unchanged. Fails
/// with [`PipelineError::InvalidArgument`] when `granularity` is not
/// positive (a non-positive threshold would never terminate).
pub fn compute_subdivision(
    ellipsoid: &Ellipsoid,
    positions: &[DVec3],
    indices: &[u32],
    granularity: f64,
) -> Result<Mesh> {
    if granularity <= 0.0 {
        return Err(PipelineError::InvalidArgument(
            "granularity must be greater than zero",
        ));
    }
    debug_assert!(indices.len() % 3 == 0, "indices must form whole triangles");

    let mut arena = VertexArena::new(positions, ellipsoid);
    let mut subdivided: Vec<u32> = Vec::with_capacity(indices.len());

    let mut queue: Vec<SubdivisionTriangle> = indices
        .chunks_exact(3)
        .map(|t| SubdivisionTriangle {
            i0: t[0],
            i1: t[1],
            i2: t[2],
        })
        .collect();

    while let Some(triangle) = queue.pop() {
        let v0 = arena.positions[triangle.i0 as usize];
        let v1 = arena.positions[triangle.i1 as usize];
        let v2 = arena.positions[triangle.i2 as usize];

        // Angular extent of each edge as seen from the ellipsoid center.
        let g0 = v0.angle_between(v1);
        let g1 = v1.angle_between(v2);
        let g2 = v2.angle_between(v0);

        let longest = g0.max(g1).max(g2);
        if longest <= granularity {
            subdivided.extend_from_slice(&[triangle.i0, triangle.i1, triangle.i2]);
            continue;
        }

        // Split the longest edge at its midpoint, repositioned onto the
        // surface along the ray from the ellipsoid center. Rotate the
        // triangle so the split edge is (a, b); both children keep the
        // parent's winding.
        let (a, b, c, va, vb) = if longest == g0 {
            (triangle.i0, triangle.i1, triangle.i2, v0, v1)
        } else if longest == g1 {
            (triangle.i1, triangle.i2, triangle.i0, v1, v2)
        } else {
            (triangle.i2, triangle.i0, triangle.i1, v2, v0)
        };
        let m = arena.intern(ellipsoid.scale_to_geocentric_surface((va + vb) * 0.5));

        // An edge shorter than the dedup cell interns its midpoint onto a
        // vertex the triangle already has; splitting there would re-queue
        // the parent without shrinking it.
        if m == a || m == b || m == c {
            subdivided.extend_from_slice(&[triangle.i0, triangle.i1, triangle.i2]);
            continue;
        }

        queue.push(SubdivisionTriangle { i0: a, i1: m, i2: c });
        queue.push(SubdivisionTriangle { i0: m, i1: b, i2: c });
    }

    Ok(Mesh {
        positions: arena.positions,
        texture_coordinates: Vec::new(),
        indices: subdivided,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four points forming a quad on the unit sphere around +X.
    fn sphere_quad() -> (Ellipsoid, Vec<DVec3>, Vec<u32>) {
        let sphere = Ellipsoid::unit_sphere();
        let a = 0.1;
        let positions = vec![
            sphere.cartographic_to_cartesian(-a, -a, 0.0),
            sphere.cartographic_to_cartesian(a, -a, 0.0),
            sphere.cartographic_to_cartesian(a, a, 0.0),
            sphere.cartographic_to_cartesian(-a, a, 0.0),
        ];
        (sphere, positions, vec![0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn test_coarse_granularity_passes_triangles_through() {
        let (sphere, positions, indices) = sphere_quad();
        let mesh = compute_subdivision(&sphere, &positions, &indices, 1.0).unwrap();
        assert_eq!(mesh.positions, positions);
        assert_eq!(mesh.triangle_count(), 2);

        let mut emitted: Vec<u32> = mesh.indices.chunks_exact(3).flatten().copied().collect();
        let mut expected = indices;
        emitted.sort_unstable();
        expected.sort_unstable();
        assert_eq!(emitted, expected);
    }

    #[test]
    fn test_every_output_edge_is_within_granularity() {
        let (sphere, positions, indices) = sphere_quad();
        let granularity = 0.05;
        let mesh = compute_subdivision(&sphere, &positions, &indices, granularity).unwrap();

        assert!(mesh.triangle_count() > 2);
        for triangle in mesh.indices.chunks_exact(3) {
            let v0 = mesh.positions[triangle[0] as usize];
            let v1 = mesh.positions[triangle[1] as usize];
            let v2 = mesh.positions[triangle[2] as usize];
            assert!(v0.angle_between(v1) <= granularity);
            assert!(v1.angle_between(v2) <= granularity);
            assert!(v2.angle_between(v0) <= granularity);
        }
    }

    #[test]
    fn test_new_vertices_lie_on_the_surface() {
        let (sphere, positions, indices) = sphere_quad();
        let mesh = compute_subdivision(&sphere, &positions, &indices, 0.05).unwrap();
        for &p in &mesh.positions[positions.len()..] {
            assert!((p.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_shared_edge_midpoint_is_deduplicated() {
        // The quad's diagonal (0-2) is the longest edge of both triangles.
        // One split level on each side must share a single midpoint vertex:
        // 4 originals + 1 midpoint, 4 children.
        let (sphere, positions, indices) = sphere_quad();
        let diagonal = positions[0].angle_between(positions[2]);
        let side = positions[0].angle_between(positions[1]);
        assert!(diagonal > side);

        let granularity = diagonal * 0.99;
        let mesh = compute_subdivision(&sphere, &positions, &indices, granularity).unwrap();
        assert_eq!(mesh.positions.len(), 5);
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn test_no_orphan_vertices_near_one_another() {
        let (sphere, positions, indices) = sphere_quad();
        let mesh = compute_subdivision(&sphere, &positions, &indices, 0.03).unwrap();

        // A crack shows up as two distinct vertices within epsilon of each
        // other. Pairwise distances must be meaningfully larger.
        for i in 0..mesh.positions.len() {
            for j in (i + 1)..mesh.positions.len() {
                let d = mesh.positions[i].distance(mesh.positions[j]);
                assert!(d > 1e-6, "vertices {i} and {j} nearly coincide (d = {d})");
            }
        }
    }

    #[test]
    fn test_edge_below_dedup_cell_terminates_unchanged() {
        // Edge extents around 5e-11 rad sit below the dedup cell on the
        // unit sphere, so every midpoint interns onto a vertex the
        // triangle already has. The triangle must come back unchanged
        // rather than re-queueing endlessly.
        let sphere = Ellipsoid::unit_sphere();
        let e = 5.0e-11;
        let positions = vec![
            sphere.cartographic_to_cartesian(0.0, 0.0, 0.0),
            sphere.cartographic_to_cartesian(e, 0.0, 0.0),
            sphere.cartographic_to_cartesian(0.0, e, 0.0),
        ];
        let mesh = compute_subdivision(&sphere, &positions, &[0, 1, 2], 1.0e-12).unwrap();
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_non_positive_granularity_is_invalid_argument() {
        let (sphere, positions, indices) = sphere_quad();
        for granularity in [0.0, -1.0] {
            assert!(matches!(
                compute_subdivision(&sphere, &positions, &indices, granularity),
                Err(PipelineError::InvalidArgument(_))
            ));
        }
    }
}
