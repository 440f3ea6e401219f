//! Geodetic height offsetting of mesh positions.

use tessera_math::Ellipsoid;

use crate::mesh::Mesh;

/// Translate every vertex along the ellipsoid surface normal by `height`.
///
/// The normal is evaluated at the vertex's nearest surface point, so the
/// offset direction is stable across repeated passes: offsetting by `h1` and
/// then `h2` equals a single offset by `h1 + h2`. Negative heights sink below
/// the reference surface.
///
/// Positions only; indices and texture coordinates are left untouched. Total
/// over well-formed input, so it cannot fail.
pub fn scale_to_geodetic_height(ellipsoid: &Ellipsoid, mut mesh: Mesh, height: f64) -> Mesh {
    if height == 0.0 {
        return mesh;
    }

    for position in &mut mesh.positions {
        let surface = ellipsoid.scale_to_geodetic_surface(*position);
        let normal = ellipsoid.geodetic_surface_normal(surface);
        *position += normal * height;
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, Vec2};
    use tessera_math::{EPSILON6, dvec3_equals_epsilon};

    fn surface_mesh(ellipsoid: &Ellipsoid) -> Mesh {
        Mesh {
            positions: vec![
                ellipsoid.cartographic_to_cartesian(0.0, 0.0, 0.0),
                ellipsoid.cartographic_to_cartesian(0.2, 0.1, 0.0),
                ellipsoid.cartographic_to_cartesian(-0.1, 0.3, 0.0),
            ],
            texture_coordinates: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_offsets_along_the_surface_normal() {
        let ellipsoid = Ellipsoid::wgs84();
        let mesh = surface_mesh(&ellipsoid);
        let lifted = scale_to_geodetic_height(&ellipsoid, mesh.clone(), 100.0);

        for (before, after) in mesh.positions.iter().zip(&lifted.positions) {
            let normal = ellipsoid.geodetic_surface_normal(*before);
            assert!(dvec3_equals_epsilon(
                *after,
                *before + normal * 100.0,
                EPSILON6
            ));
        }
    }

    #[test]
    fn test_sequential_offsets_compose_additively() {
        let ellipsoid = Ellipsoid::wgs84();
        let mesh = surface_mesh(&ellipsoid);

        let stepwise = scale_to_geodetic_height(
            &ellipsoid,
            scale_to_geodetic_height(&ellipsoid, mesh.clone(), 150.0),
            -40.0,
        );
        let direct = scale_to_geodetic_height(&ellipsoid, mesh, 110.0);

        for (a, b) in stepwise.positions.iter().zip(&direct.positions) {
            assert!(dvec3_equals_epsilon(*a, *b, EPSILON6));
        }
    }

    #[test]
    fn test_negative_height_sinks_below_surface() {
        let ellipsoid = Ellipsoid::wgs84();
        let mesh = surface_mesh(&ellipsoid);
        let sunk = scale_to_geodetic_height(&ellipsoid, mesh.clone(), -500.0);
        for (before, after) in mesh.positions.iter().zip(&sunk.positions) {
            assert!(after.length() < before.length());
        }
    }

    #[test]
    fn test_indices_and_texture_coordinates_untouched() {
        let ellipsoid = Ellipsoid::wgs84();
        let mesh = surface_mesh(&ellipsoid);
        let lifted = scale_to_geodetic_height(&ellipsoid, mesh.clone(), 42.0);
        assert_eq!(lifted.indices, mesh.indices);
        assert_eq!(lifted.texture_coordinates, mesh.texture_coordinates);
    }

    #[test]
    fn test_zero_height_is_a_no_op() {
        let ellipsoid = Ellipsoid::wgs84();
        let mesh = surface_mesh(&ellipsoid);
        assert_eq!(scale_to_geodetic_height(&ellipsoid, mesh.clone(), 0.0), mesh);
    }
}
