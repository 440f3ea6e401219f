//! Local 2D coordinate frame tangent to the ellipsoid surface.

use glam::{DVec2, DVec3};
use tessera_math::{EPSILON10, Ellipsoid};

use crate::error::{PipelineError, Result};

/// A plane tangent to the ellipsoid at a representative origin, with two
/// orthonormal in-plane basis vectors.
///
/// Computed once per boundary loop and read-only afterward; maps positions
/// between the ellipsoid's 3D frame and the plane's 2D frame.
#[derive(Clone, Copy, Debug)]
pub struct TangentPlane {
    origin: DVec3,
    x_axis: DVec3,
    y_axis: DVec3,
    normal: DVec3,
}

impl TangentPlane {
    /// Build a tangent plane for a set of surface positions.
    ///
    /// The origin is the centroid of the positions projected onto the
    /// geodetic surface; the basis is derived from the world +Z axis via
    /// cross products, falling back to +X when the surface normal is
    /// parallel to +Z. Fails with [`PipelineError::InvalidArgument`] when
    /// `points` is empty.
    pub fn new(ellipsoid: &Ellipsoid, points: &[DVec3]) -> Result<Self> {
        if points.is_empty() {
            return Err(PipelineError::InvalidArgument(
                "at least one point is required to build a tangent plane",
            ));
        }

        let centroid = points.iter().sum::<DVec3>() / points.len() as f64;
        let origin = ellipsoid.scale_to_geodetic_surface(centroid);
        let normal = ellipsoid.geodetic_surface_normal(origin);

        let mut x_axis = DVec3::Z.cross(normal);
        if x_axis.length_squared() < EPSILON10 {
            // Normal is parallel to +Z (polar origin); fall back to +X.
            x_axis = DVec3::X.cross(normal);
        }
        let x_axis = x_axis.normalize();
        let y_axis = normal.cross(x_axis).normalize();

        Ok(Self {
            origin,
            x_axis,
            y_axis,
            normal,
        })
    }

    /// The plane's origin on the ellipsoid surface.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// The outward surface normal at the origin.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Project a single position onto the plane.
    pub fn project_point_onto_plane(&self, point: DVec3) -> DVec2 {
        let d = point - self.origin;
        DVec2::new(self.x_axis.dot(d), self.y_axis.dot(d))
    }

    /// Project positions onto the plane, preserving order and count.
    ///
    /// Fails with [`PipelineError::InvalidArgument`] when `points` is empty.
    pub fn project_points_onto_plane(&self, points: &[DVec3]) -> Result<Vec<DVec2>> {
        if points.is_empty() {
            return Err(PipelineError::InvalidArgument(
                "at least one point is required for plane projection",
            ));
        }
        Ok(points
            .iter()
            .map(|&p| self.project_point_onto_plane(p))
            .collect())
    }
}
