//! Texture coordinates from the tangent-plane bounding rectangle.

use glam::{DVec2, Vec2};
use tessera_math::Rect2;

use crate::error::{PipelineError, Result};
use crate::mesh::Mesh;
use crate::tangent_plane::TangentPlane;

/// Attach per-vertex texture coordinates to a mesh.
///
/// The axis-aligned bounding rectangle of the projected boundary loop maps to
/// the unit square: each vertex position is projected onto the tangent plane,
/// shifted by the rectangle minimum, and divided by the rectangle extent.
/// Subdivision vertices outside the boundary's footprint legitimately land
/// outside `[0, 1]`.
///
/// Vertices are processed in mesh-index order, so the coordinates stay
/// index-aligned with positions. Fails with
/// [`PipelineError::InvalidArgument`] when the boundary loop is empty.
pub fn append_texture_coordinates(
    tangent_plane: &TangentPlane,
    boundary_2d: &[DVec2],
    mut mesh: Mesh,
) -> Result<Mesh> {
    let rectangle = Rect2::from_points(boundary_2d).ok_or(PipelineError::InvalidArgument(
        "a non-empty boundary loop is required for texture coordinates",
    ))?;
    let origin = rectangle.minimum();
    let extent = rectangle.extent();

    mesh.texture_coordinates = mesh
        .positions
        .iter()
        .map(|&p| {
            let st = tangent_plane.project_point_onto_plane(p) - origin;
            Vec2::new((st.x / extent.x) as f32, (st.y / extent.y) as f32)
        })
        .collect();

    Ok(mesh)
}
