//! Demo binary that tessellates a sample polygon and reports mesh statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p tessera-demo` for the defaults, or
//! `cargo run -p tessera-demo -- --granularity-deg 0.1 --height 2000` to
//! refine the mesh and float it above the surface.

use std::mem;
use std::path::PathBuf;

use clap::Parser;
use glam::DVec3;
use tessera_config::{CliArgs, TesseraConfig};
use tessera_math::Ellipsoid;
use tessera_polygon::{PolygonTessellation, PolygonVertex};
use tracing::{error, info, warn};

/// A concave coastline-like loop of geodetic (longitude, latitude) degrees.
const SAMPLE_BOUNDARY_DEG: [(f64, f64); 6] = [
    (-122.0, 37.0),
    (-121.0, 37.0),
    (-121.5, 37.5), // notch makes the polygon concave
    (-121.0, 38.0),
    (-122.0, 38.0),
    (-122.5, 37.5),
];

fn boundary_positions(ellipsoid: &Ellipsoid) -> Vec<DVec3> {
    SAMPLE_BOUNDARY_DEG
        .iter()
        .map(|&(lon_deg, lat_deg)| {
            ellipsoid.cartographic_to_cartesian(lon_deg.to_radians(), lat_deg.to_radians(), 0.0)
        })
        .collect()
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = match TesseraConfig::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config unavailable ({e}), using defaults");
            TesseraConfig::default()
        }
    };
    config.apply_cli_overrides(&args);

    tessera_log::init_logging(Some(&config));

    let [rx, ry, rz] = config.planet.radii_m;
    let ellipsoid = Ellipsoid::new(rx, ry, rz);
    let tessellation = PolygonTessellation {
        ellipsoid,
        granularity: config.tessellation.granularity_deg.to_radians(),
        height: config.tessellation.height_m,
    };

    info!(
        granularity_deg = config.tessellation.granularity_deg,
        height_m = config.tessellation.height_m,
        "tessellating sample polygon"
    );

    let boundary = boundary_positions(&ellipsoid);
    match tessellation.tessellate(&boundary) {
        Ok(meshes) => {
            info!(
                sub_meshes = meshes.len(),
                triangles = meshes.total_triangle_count(),
                vertices = meshes.total_vertex_count(),
                "tessellation complete"
            );
            for (i, mesh) in meshes.iter().enumerate() {
                let vertex_bytes = mesh.vertex_count() * mem::size_of::<PolygonVertex>();
                let index_bytes = mesh.index_buffer_u16().len() * mem::size_of::<u16>();
                info!(
                    sub_mesh = i,
                    vertices = mesh.vertex_count(),
                    triangles = mesh.triangle_count(),
                    vertex_bytes,
                    index_bytes,
                    "sub-mesh ready for upload"
                );
            }
            if meshes.is_empty() {
                warn!("tessellation produced no meshes");
            }
        }
        Err(e) => error!("tessellation failed: {e}"),
    }
}
