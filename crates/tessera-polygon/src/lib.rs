//! Tessellation of polygons on an ellipsoid surface.
//!
//! Turns a closed loop of 3D surface positions into GPU-ready triangle meshes:
//! tangent-plane projection, boundary cleanup, winding normalization,
//! concave-polygon ear clipping, curvature-following geodesic subdivision,
//! texture-coordinate generation, geodetic height offsetting, and 16-bit
//! index partitioning.
//!
//! The stages are pure functions that flow strictly forward; the
//! [`PolygonTessellation`] orchestrator runs the whole pass and hands the
//! resulting [`PartitionedMeshSet`] to the caller.

mod cleanup;
mod ear_clip;
mod error;
mod height;
mod mesh;
mod partition;
mod pipeline;
mod project;
mod subdivision;
mod tangent_plane;
mod texture;
mod winding;

pub use cleanup::clean_up;
pub use ear_clip::ear_clip_2d;
pub use error::{PipelineError, Result};
pub use height::scale_to_geodetic_height;
pub use mesh::{Mesh, PartitionedMeshSet, PolygonVertex};
pub use partition::{MAX_VERTICES_PER_PARTITION, fit_to_u16_indices};
pub use pipeline::PolygonTessellation;
pub use project::project_to_2d;
pub use subdivision::compute_subdivision;
pub use tangent_plane::TangentPlane;
pub use texture::append_texture_coordinates;
pub use winding::{WindingOrder, compute_area_2d, compute_winding_order_2d};
