//! Point-pair records for batch distance runs.
//!
//! One record per line: `<lat1> <lon1> <lat2> <lon2> [name]`. Blank lines
//! and `#` comments are skipped.

use itertools::Itertools;
use tracing::trace;

use crate::error::{GeodesyError, GeodesyResult};
use crate::point::GeoPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct PointPair {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub name: String,
}

/// Splits `data` on runs of ASCII whitespace into at most `max` fields; the
/// last field keeps the rest of the line, inner whitespace included.
pub fn split_fields(data: &str, max: usize) -> SplitFields<'_> {
    SplitFields {
        rest: data.trim_matches(|c: char| c.is_ascii_whitespace()),
        remaining: max,
    }
}

pub struct SplitFields<'a> {
    rest: &'a str,
    remaining: usize,
}

impl<'a> Iterator for SplitFields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.rest.is_empty() {
            return None;
        }
        self.remaining -= 1;

        let end = match self.rest.find(|c: char| c.is_ascii_whitespace()) {
            Some(end) if self.remaining > 0 => end,
            _ => self.rest.len(),
        };
        let field = &self.rest[..end];
        self.rest = self.rest[end..].trim_start_matches(|c: char| c.is_ascii_whitespace());
        Some(field)
    }
}

fn parse_coord(line: usize, what: &str, field: &str) -> GeodesyResult<f64> {
    field.parse::<f64>().map_err(|_| GeodesyError::Parse {
        line,
        message: format!("invalid {what} '{field}'"),
    })
}

fn parse_point(line: usize, lat: &str, lon: &str) -> GeodesyResult<GeoPoint> {
    let lat = parse_coord(line, "latitude", lat)?;
    let lon = parse_coord(line, "longitude", lon)?;
    GeoPoint::try_new(lat, lon).map_err(|e| GeodesyError::Parse {
        line,
        message: e.to_string(),
    })
}

/// Parses every record in `data`. Line numbers in errors start at 1.
pub fn parse_point_pairs(data: &str) -> GeodesyResult<Vec<PointPair>> {
    let mut pairs = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = split_fields(line, 5);
        let Some((lat1, lon1, lat2, lon2)) = fields.by_ref().take(4).collect_tuple() else {
            return Err(GeodesyError::Parse {
                line: line_num,
                message: format!("expected 4 coordinates in '{line}'"),
            });
        };

        let from = parse_point(line_num, lat1, lon1)?;
        let to = parse_point(line_num, lat2, lon2)?;
        let name = fields
            .next()
            .map_or_else(|| format!("line {line_num}"), str::to_string);
        trace!("{name}: {from} -> {to}");

        pairs.push(PointPair { from, to, name });
    }

    Ok(pairs)
}
