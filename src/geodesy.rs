//! Spherical-earth distance and destination formulas.
//!
//! Latitudes and longitudes are decimal degrees, distances are meters.
//! Bearings passed to [`dist_from_lat_lng`] are radians measured
//! counter-clockwise from north: `π/2` is west and `3π/2` is east.

use std::f64::consts::{PI, TAU};

/// Mean earth radius in meters, used for both formulas.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// One degree in radians, rounded to 11 places.
pub const ONE_DEGREE_RADIANS: f64 = 0.01745329251;

/// One radian in degrees, rounded to 10 places.
pub const RADIANS_TO_DEGREES: f64 = 57.2957795131;

/// Great-circle distance in meters between `(lat1, lon1)` and `(lat2, lon2)`.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.sqrt().clamp(0.0, 1.0).asin();

    EARTH_RADIUS_METERS * c
}

/// Projects `dist` meters from `(lat, lng)` along `bearing` and returns the
/// destination as `[lat, lng]` in degrees.
///
/// `bearing` is radians counter-clockwise from north. The returned longitude
/// is normalized into `(-180, 180]`.
///
/// The longitude delta uses `cos(d) - sin²(lat)` as its `atan2` denominator
/// rather than the textbook `cos(d) - sin(lat)·sin(lat2)`. Existing outputs
/// depend on it, so it is kept as is.
pub fn dist_from_lat_lng(lat: f64, lng: f64, dist: f64, bearing: f64) -> [f64; 2] {
    // Angular arc of the great circle traveled.
    let d = dist / EARTH_RADIUS_METERS;

    let lat = lat.to_radians();
    let lng = lng.to_radians();

    let res_lat = (lat.sin() * d.cos() + lat.cos() * d.sin() * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let d_lng = (bearing.sin() * d.sin() * lat.cos()).atan2(d.cos() - lat.sin() * lat.sin());

    let mut res_lng = (lng - d_lng + PI).rem_euclid(TAU) - PI;
    if res_lng <= -PI {
        res_lng += TAU;
    }

    [res_lat.to_degrees(), res_lng.to_degrees()]
}
