//! Element-wise evaluation over slices.
//!
//! Every argument must have length 1 or the common length `N`. Length-1
//! arguments are repeated for every element, the same broadcasting rule
//! numeric array libraries apply to 1-element arrays.

use itertools::izip;
use tracing::trace;

use crate::error::{GeodesyError, GeodesyResult};
use crate::geodesy::{dist_from_lat_lng, haversine};

fn broadcast_len(args: &[(&'static str, &[f64])]) -> GeodesyResult<usize> {
    let expected = args
        .iter()
        .map(|(_, values)| values.len())
        .find(|&len| len != 1)
        .unwrap_or(1);

    match args
        .iter()
        .find(|(_, values)| values.len() != 1 && values.len() != expected)
    {
        Some(&(argument, values)) => Err(GeodesyError::ShapeMismatch {
            argument,
            len: values.len(),
            expected,
        }),
        None => Ok(expected),
    }
}

fn broadcast(values: &[f64], len: usize) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().cycle().take(len)
}

/// [`haversine`] applied to each element.
pub fn haversine_many(
    lat1: &[f64],
    lon1: &[f64],
    lat2: &[f64],
    lon2: &[f64],
) -> GeodesyResult<Vec<f64>> {
    let len = broadcast_len(&[
        ("lat1", lat1),
        ("lon1", lon1),
        ("lat2", lat2),
        ("lon2", lon2),
    ])?;
    trace!("haversine over {len} elements");

    let distances = izip!(
        broadcast(lat1, len),
        broadcast(lon1, len),
        broadcast(lat2, len),
        broadcast(lon2, len)
    )
    .map(|(lat1, lon1, lat2, lon2)| haversine(lat1, lon1, lat2, lon2))
    .collect();

    Ok(distances)
}

/// [`dist_from_lat_lng`] applied to each element.
pub fn dist_from_lat_lng_many(
    lat: &[f64],
    lng: &[f64],
    dist: &[f64],
    bearing: &[f64],
) -> GeodesyResult<Vec<[f64; 2]>> {
    let len = broadcast_len(&[
        ("lat", lat),
        ("lng", lng),
        ("dist", dist),
        ("bearing", bearing),
    ])?;
    trace!("destination over {len} elements");

    let points = izip!(
        broadcast(lat, len),
        broadcast(lng, len),
        broadcast(dist, len),
        broadcast(bearing, len)
    )
    .map(|(lat, lng, dist, bearing)| dist_from_lat_lng(lat, lng, dist, bearing))
    .collect();

    Ok(points)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn matches_scalar_formula() {
        let lat1 = [0.0, 89.9, 52.52];
        let lon1 = [0.0, 0.0, 13.405];
        let lat2 = [0.1, 90.0, 48.8566];
        let lon2 = [0.0, 0.0, 2.3522];

        let distances = haversine_many(&lat1, &lon1, &lat2, &lon2).unwrap();
        assert_eq!(distances.len(), 3);
        for (i, d) in distances.iter().enumerate() {
            assert_eq!(*d, haversine(lat1[i], lon1[i], lat2[i], lon2[i]));
        }
    }

    #[test]
    fn single_values_broadcast() {
        let lats = [10.0, 20.0, 30.0, 40.0];
        let distances = haversine_many(&[0.0], &[0.0], &lats, &[0.0]).unwrap();
        assert_eq!(distances.len(), 4);
        assert!(distances.windows(2).all(|w| w[0] < w[1]));

        let points = dist_from_lat_lng_many(&[45.0], &[7.0], &[1_000.0, 2_000.0], &[0.0]).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], dist_from_lat_lng(45.0, 7.0, 2_000.0, 0.0));
        assert!(points[0][0] < points[1][0]);
    }

    #[test]
    fn all_scalars_give_one_element() {
        let distances = haversine_many(&[0.0], &[0.0], &[0.1], &[0.0]).unwrap();
        assert_eq!(distances, vec![haversine(0.0, 0.0, 0.1, 0.0)]);
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        assert!(haversine_many(&[], &[], &[], &[]).unwrap().is_empty());
        assert!(dist_from_lat_lng_many(&[], &[1.0], &[2.0], &[0.0])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = haversine_many(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 1.0, 2.0], &[0.0]).unwrap_err();
        assert_eq!(
            err,
            GeodesyError::ShapeMismatch {
                argument: "lat2",
                len: 3,
                expected: 2,
            }
        );

        let err = dist_from_lat_lng_many(&[], &[1.0, 2.0], &[0.0], &[PI]).unwrap_err();
        assert_eq!(err.to_string(), "argument 'lng' has length 2, expected 1 or 0");
    }
}
