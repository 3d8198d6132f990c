//! Great-circle distance and destination projection on a spherical earth.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`geodesy`] | `haversine`, `dist_from_lat_lng`, earth radius constants   |
//! | [`point`]   | `GeoPoint`, `Bearing` (counter-clockwise from north)       |
//! | [`array`]   | element-wise `haversine_many`, `dist_from_lat_lng_many`    |
//! | [`input`]   | point-pair record parsing for batch runs                   |
//! | [`error`]   | `GeodesyError`, `GeodesyResult<T>`                         |

pub mod array;
pub mod error;
pub mod geodesy;
pub mod input;
pub mod point;

pub use array::{dist_from_lat_lng_many, haversine_many};
pub use error::{GeodesyError, GeodesyResult};
pub use geodesy::{
    dist_from_lat_lng, haversine, EARTH_RADIUS_METERS, ONE_DEGREE_RADIANS, RADIANS_TO_DEGREES,
};
pub use input::{parse_point_pairs, PointPair};
pub use point::{Bearing, GeoPoint};
