use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use crate::error::{GeodesyError, GeodesyResult};
use crate::geodesy::{dist_from_lat_lng, haversine};

/// A latitude/longitude pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Like [`GeoPoint::new`], but rejects NaN and infinite coordinates.
    pub fn try_new(lat: f64, lon: f64) -> GeodesyResult<Self> {
        if !lat.is_finite() {
            return Err(GeodesyError::NonFinite {
                field: "latitude",
                value: lat,
            });
        }
        if !lon.is_finite() {
            return Err(GeodesyError::NonFinite {
                field: "longitude",
                value: lon,
            });
        }
        Ok(Self::new(lat, lon))
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }

    /// The point `dist` meters away along `bearing`.
    pub fn destination(&self, dist: f64, bearing: Bearing) -> GeoPoint {
        let [lat, lon] = dist_from_lat_lng(self.lat, self.lon, dist, bearing.radians());
        GeoPoint::new(lat, lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// geo stores x = longitude, y = latitude.
impl From<geo::Point> for GeoPoint {
    fn from(point: geo::Point) -> Self {
        GeoPoint::new(point.y(), point.x())
    }
}

impl From<GeoPoint> for geo::Point {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

/// Direction of travel in radians, counter-clockwise from north.
///
/// ```text
///              N (0)
///                |
///   W (π/2) <----+----> E (3π/2)
///                |
///              S (π)
/// ```
///
/// Compass azimuths run the other way; convert them with
/// [`Bearing::from_azimuth_degrees`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bearing(f64);

impl Bearing {
    pub const NORTH: Bearing = Bearing(0.0);
    pub const WEST: Bearing = Bearing(FRAC_PI_2);
    pub const SOUTH: Bearing = Bearing(PI);
    pub const EAST: Bearing = Bearing(3.0 * FRAC_PI_2);

    pub fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Converts a compass azimuth (degrees clockwise from north) into a
    /// counter-clockwise bearing in `[0, 2π)`.
    pub fn from_azimuth_degrees(azimuth: f64) -> Self {
        Self((-azimuth.to_radians()).rem_euclid(TAU))
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    /// The compass azimuth in degrees, `[0, 360)`.
    pub fn azimuth_degrees(self) -> f64 {
        (-self.0).rem_euclid(TAU).to_degrees()
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} rad", self.0)
    }
}
