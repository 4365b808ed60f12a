//! KML coordinate tuple string parsing
//!
//! A KML `<coordinates>` element holds one or more comma-separated
//! `longitude,latitude,altitude` tuples, with tuples separated by single
//! spaces.

use serde::Serialize;

/// Parsed coordinates of a Point geometry.
///
/// A string with exactly one tuple collapses to the bare triple, so it
/// serializes as a flat `[lon, lat, alt]` array; a string with several tuples
/// serializes as an array of such triples. Callers handling both shapes must
/// match on the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// A single `[lon, lat, alt]` triple.
    Single([f64; 3]),
    /// A sequence of `[lon, lat, alt]` triples.
    Multi(Vec<[f64; 3]>),
}

/// Parse a whitespace-delimited coordinate tuple string.
///
/// Malformed or missing numeric components become `f64::NAN` rather than an
/// error, so partially bad coordinate data still converts. NaN serializes to
/// JSON `null`.
pub fn parse_coordinate_string(coordinates: &str) -> Coordinates {
    let mut points: Vec<[f64; 3]> = coordinates.split(' ').map(parse_tuple).collect();

    if points.len() == 1 {
        Coordinates::Single(points.remove(0))
    } else {
        Coordinates::Multi(points)
    }
}

fn parse_tuple(token: &str) -> [f64; 3] {
    let mut parts = token.split(',');
    let mut component = || parts.next().map_or(f64::NAN, parse_component);
    [component(), component(), component()]
}

fn parse_component(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}
