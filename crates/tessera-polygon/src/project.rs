//! Post-pass projection of finished meshes into a 2D map frame.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Apply an external map projection to every vertex of a finished mesh.
///
/// Used by non-3D render modes: the projection is an opaque pure function
/// supplied by the caller and runs only as a post-pass over the fully
/// tessellated 3D mesh. Projected positions keep `z = 0`; indices and
/// texture coordinates are unchanged.
pub fn project_to_2d<F>(mut mesh: Mesh, projection: F) -> Mesh
where
    F: Fn(DVec3) -> DVec2,
{
    for position in &mut mesh.positions {
        let projected = projection(*position);
        *position = DVec3::new(projected.x, projected.y, 0.0);
    }
    mesh
}
