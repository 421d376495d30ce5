//! Great-circle distance

use crate::domain::value_objects::GeoPoint;

/// Mean Earth radius used for all distance computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Haversine distance between two points, in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = to_radians(b.latitude - a.latitude);
    let d_lon = to_radians(b.longitude - a.longitude);

    let h = (d_lat / 2.0).sin().powi(2)
        + to_radians(a.latitude).cos() * to_radians(b.latitude).cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 near the antipode. clamp keeps NaN input as NaN.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}
