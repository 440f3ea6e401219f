//! The full tessellation pass, from boundary loop to partitioned meshes.

use glam::DVec3;
use tessera_math::Ellipsoid;
use tracing::debug;

use crate::cleanup::clean_up;
use crate::ear_clip::ear_clip_2d;
use crate::error::{PipelineError, Result};
use crate::height::scale_to_geodetic_height;
use crate::mesh::PartitionedMeshSet;
use crate::partition::fit_to_u16_indices;
use crate::subdivision::compute_subdivision;
use crate::tangent_plane::TangentPlane;
use crate::texture::append_texture_coordinates;
use crate::winding::{WindingOrder, compute_winding_order_2d};

/// Parameters for one tessellation pass over a polygon boundary.
///
/// The pass is synchronous, single-threaded, and side-effect-free beyond the
/// returned mesh set: re-running with the same inputs produces the same
/// output, and the caller swaps in the new set atomically when inputs change.
#[derive(Clone, Copy, Debug)]
pub struct PolygonTessellation {
    /// The reference surface. Shared read-only; never mutated by the pass.
    pub ellipsoid: Ellipsoid,
    /// Maximum angular extent of any output edge, in radians. Must be
    /// positive.
    pub granularity: f64,
    /// Signed offset along the surface normal, in the radii's unit.
    pub height: f64,
}

impl Default for PolygonTessellation {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::wgs84(),
            granularity: 1.0_f64.to_radians(),
            height: 0.0,
        }
    }
}

impl PolygonTessellation {
    /// Tessellation over the given ellipsoid with default granularity and
    /// height.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            ..Self::default()
        }
    }

    /// Run the full pipeline over a closed boundary loop of surface
    /// positions.
    ///
    /// Stages, strictly forward: cleanup, tangent-plane projection, winding
    /// normalization (the 2D and 3D sequences are reversed in lock-step when
    /// the boundary is clockwise, keeping them index-aligned), ear clipping,
    /// geodesic subdivision, texture coordinates, height offset, and 16-bit
    /// index partitioning.
    ///
    /// Fails with [`PipelineError::InvalidArgument`] when the granularity is
    /// not positive, fewer than three positions are supplied, or fewer than
    /// three distinct positions survive cleanup; with
    /// [`PipelineError::MalformedPolygon`] when the boundary cannot be
    /// triangulated.
    pub fn tessellate(&self, positions: &[DVec3]) -> Result<PartitionedMeshSet> {
        if self.granularity <= 0.0 {
            return Err(PipelineError::InvalidArgument(
                "granularity must be greater than zero",
            ));
        }

        let mut cleaned = clean_up(positions)?;
        if cleaned.len() < 3 {
            return Err(PipelineError::InvalidArgument(
                "fewer than three distinct positions remain after cleanup",
            ));
        }

        let tangent_plane = TangentPlane::new(&self.ellipsoid, &cleaned)?;
        let mut boundary_2d = tangent_plane.project_points_onto_plane(&cleaned)?;

        if compute_winding_order_2d(&boundary_2d)? == WindingOrder::Clockwise {
            boundary_2d.reverse();
            cleaned.reverse();
        }

        let boundary_indices = ear_clip_2d(&boundary_2d)?;
        debug!(
            boundary_vertices = cleaned.len(),
            triangles = boundary_indices.len() / 3,
            "triangulated polygon boundary"
        );

        let mesh =
            compute_subdivision(&self.ellipsoid, &cleaned, &boundary_indices, self.granularity)?;
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            granularity = self.granularity,
            "subdivided to granularity"
        );

        let mesh = append_texture_coordinates(&tangent_plane, &boundary_2d, mesh)?;
        let mesh = scale_to_geodetic_height(&self.ellipsoid, mesh, self.height);

        let meshes = fit_to_u16_indices(mesh);
        debug!(sub_meshes = meshes.len(), "partitioned for 16-bit indices");
        Ok(meshes)
    }
}
