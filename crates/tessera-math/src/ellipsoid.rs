//! Ellipsoid surface model: normals, surface projection, and geodetic conversion.
//!
//! An [`Ellipsoid`] is defined by three semi-axis radii and is immutable; it is
//! shared by reference across every tessellation stage. Concurrent read-only
//! sharing is safe because no method mutates the model.

use glam::DVec3;

use crate::tolerance::EPSILON10;

/// An ellipsoid centered at the origin, aligned with the coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    radii: DVec3,
    radii_squared: DVec3,
    one_over_radii_squared: DVec3,
}

impl Ellipsoid {
    /// Create an ellipsoid from its three semi-axis radii. All radii must be
    /// positive.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(x > 0.0 && y > 0.0 && z > 0.0, "radii must be positive");
        let radii = DVec3::new(x, y, z);
        Self {
            radii,
            radii_squared: radii * radii,
            one_over_radii_squared: 1.0 / (radii * radii),
        }
    }

    /// The WGS84 reference ellipsoid, in meters.
    pub fn wgs84() -> Self {
        Self::new(6_378_137.0, 6_378_137.0, 6_356_752.314_245)
    }

    /// The unit sphere. Convenient for tests and scale-free geometry.
    pub fn unit_sphere() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// The semi-axis radii.
    pub fn radii(&self) -> DVec3 {
        self.radii
    }

    /// The largest of the three semi-axis radii.
    pub fn maximum_radius(&self) -> f64 {
        self.radii.x.max(self.radii.y).max(self.radii.z)
    }

    /// The componentwise reciprocal of the squared radii.
    pub fn one_over_radii_squared(&self) -> DVec3 {
        self.one_over_radii_squared
    }

    /// Outward unit normal of the ellipsoid surface at (or below/above) the
    /// given position, in the geodetic sense.
    pub fn geodetic_surface_normal(&self, position: DVec3) -> DVec3 {
        (position * self.one_over_radii_squared).normalize()
    }

    /// Scale a position onto the surface along the ray from the ellipsoid
    /// center through the position.
    ///
    /// This is the center-ray intersection used to reposition subdivision
    /// midpoints; it is not the nearest surface point.
    pub fn scale_to_geocentric_surface(&self, position: DVec3) -> DVec3 {
        let beta = 1.0
            / (position * position)
                .dot(self.one_over_radii_squared)
                .sqrt();
        position * beta
    }

    /// Project a position onto the nearest point of the ellipsoid surface in
    /// the geodetic sense.
    ///
    /// Newton iteration on the ellipsoid constraint, seeded with the
    /// geocentric scaling. Converges in a handful of iterations for positions
    /// anywhere near the surface.
    pub fn scale_to_geodetic_surface(&self, position: DVec3) -> DVec3 {
        let oors = self.one_over_radii_squared;

        let beta = 1.0 / (position * position).dot(oors).sqrt();
        let n = (beta * position * oors).length();
        let mut alpha = (1.0 - beta) * (position.length() / n);

        let x2 = position.x * position.x * oors.x;
        let y2 = position.y * position.y * oors.y;
        let z2 = position.z * position.z * oors.z;

        let mut da;
        let mut db;
        let mut dc;
        loop {
            da = 1.0 / (1.0 + alpha * oors.x);
            db = 1.0 / (1.0 + alpha * oors.y);
            dc = 1.0 / (1.0 + alpha * oors.z);

            let da2 = da * da;
            let db2 = db * db;
            let dc2 = dc * dc;

            let s = x2 * da2 + y2 * db2 + z2 * dc2 - 1.0;
            if s.abs() <= EPSILON10 {
                break;
            }

            let ds_da =
                -2.0 * (x2 * da2 * da * oors.x + y2 * db2 * db * oors.y + z2 * dc2 * dc * oors.z);
            alpha -= s / ds_da;
        }

        DVec3::new(position.x * da, position.y * db, position.z * dc)
    }

    /// Convert geodetic longitude/latitude (radians) and height above the
    /// surface (same unit as the radii) to a cartesian position.
    pub fn cartographic_to_cartesian(&self, longitude: f64, latitude: f64, height: f64) -> DVec3 {
        let cos_latitude = latitude.cos();
        let normal = DVec3::new(
            cos_latitude * longitude.cos(),
            cos_latitude * longitude.sin(),
            latitude.sin(),
        );

        let k = self.radii_squared * normal;
        let gamma = normal.dot(k).sqrt();
        k / gamma + normal * height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::{EPSILON6, EPSILON10, dvec3_equals_epsilon};

    #[test]
    fn test_wgs84_equatorial_surface_point() {
        let ellipsoid = Ellipsoid::wgs84();
        let p = ellipsoid.cartographic_to_cartesian(0.0, 0.0, 0.0);
        assert!(dvec3_equals_epsilon(
            p,
            DVec3::new(6_378_137.0, 0.0, 0.0),
            EPSILON6
        ));
    }

    #[test]
    fn test_geodetic_surface_normal_on_sphere_is_radial() {
        let sphere = Ellipsoid::unit_sphere();
        let p = DVec3::new(0.0, 0.0, 2.5);
        assert!(dvec3_equals_epsilon(
            sphere.geodetic_surface_normal(p),
            DVec3::Z,
            EPSILON10
        ));
    }

    #[test]
    fn test_scale_to_geocentric_surface_lands_on_surface() {
        let sphere = Ellipsoid::unit_sphere();
        let p = sphere.scale_to_geocentric_surface(DVec3::new(2.0, 0.0, 0.0));
        assert!(dvec3_equals_epsilon(p, DVec3::X, EPSILON10));

        let ellipsoid = Ellipsoid::new(2.0, 3.0, 4.0);
        let q = ellipsoid.scale_to_geocentric_surface(DVec3::new(5.0, 5.0, 5.0));
        let constraint = (q * q).dot(ellipsoid.one_over_radii_squared());
        assert!((constraint - 1.0).abs() < EPSILON10);
    }

    #[test]
    fn test_scale_to_geodetic_surface_satisfies_constraint() {
        let ellipsoid = Ellipsoid::wgs84();
        let above = ellipsoid.cartographic_to_cartesian(0.6, 0.4, 12_000.0);
        let surface = ellipsoid.scale_to_geodetic_surface(above);
        let constraint = (surface * surface).dot(ellipsoid.one_over_radii_squared());
        assert!((constraint - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_to_geodetic_surface_is_along_the_normal() {
        let ellipsoid = Ellipsoid::wgs84();
        let above = ellipsoid.cartographic_to_cartesian(-1.2, 0.9, 5_000.0);
        let surface = ellipsoid.scale_to_geodetic_surface(above);
        let normal = ellipsoid.geodetic_surface_normal(surface);

        // The offset from surface to the original point must be parallel to
        // the surface normal there.
        let offset = (above - surface).normalize();
        assert!((offset.dot(normal).abs() - 1.0).abs() < EPSILON6);
    }

    #[test]
    fn test_surface_point_is_a_fixed_point_of_both_scalings() {
        let ellipsoid = Ellipsoid::wgs84();
        let p = ellipsoid.cartographic_to_cartesian(1.0, -0.3, 0.0);
        assert!(dvec3_equals_epsilon(
            ellipsoid.scale_to_geodetic_surface(p),
            p,
            EPSILON6
        ));
        assert!(dvec3_equals_epsilon(
            ellipsoid.scale_to_geocentric_surface(p),
            p,
            EPSILON6
        ));
    }
}
