//! Haversine great-circle distance.
//!
//! Used to decide which drivers are close enough to a location to count
//! toward its driver-availability score. Ignores roads entirely.

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two (lat, lng) points in miles.
pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Whether `point` lies strictly within `radius_miles` of `center`.
pub fn within_radius(point: (f64, f64), center: (f64, f64), radius_miles: f64) -> bool {
    haversine_miles(point, center) < radius_miles
}
