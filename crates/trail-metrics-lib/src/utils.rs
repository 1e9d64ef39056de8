//! Geodesic helpers shared by the metrics pipeline

use geo::Point;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6371000.0;

/// Haversine distance between two WGS84 points in meters.
///
/// Points follow the geo convention: x is longitude, y is latitude, both in
/// degrees. Elevation is ignored; this is the planar distance along the
/// sphere's surface.
#[inline]
pub fn haversine_distance(p1: Point<f64>, p2: Point<f64>) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let delta_lat = (p2.y() - p1.y()).to_radians();
    let delta_lon = (p2.x() - p1.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = Point::new(-0.5105, 39.9755);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_along_equator() {
        // One degree of longitude on the equator spans R * pi / 180 meters.
        let expected = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        let d = haversine_distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_symmetry() {
        let a = Point::new(-0.1278, 51.5074);
        let b = Point::new(2.3522, 48.8566);
        let ab = haversine_distance(a, b);
        let ba = haversine_distance(b, a);
        assert!((ab - ba).abs() < 1e-9);
        // London to Paris is roughly 340 km
        assert!(ab > 330_000.0 && ab < 350_000.0);
    }

    #[test]
    fn test_never_negative() {
        let a = Point::new(-0.51, 39.97);
        let b = Point::new(-0.52, 39.96);
        assert!(haversine_distance(a, b) > 0.0);
        assert!(haversine_distance(b, a) > 0.0);
    }
}
