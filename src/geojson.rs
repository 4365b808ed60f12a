//! GeoJSON output types
//!
//! Only the subset produced by the converter is modelled: Point geometries,
//! string-valued properties, and the collection wrapper. The `type` tags of
//! the GeoJSON spec come from internally-tagged serde serialization.

use crate::coordinates::Coordinates;
use crate::style::Style;
use serde::Serialize;
use std::collections::HashMap;

/// Feature geometry. Serializes with a `"type"` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Point geometry with KML coordinate semantics (see [`Coordinates`]).
    Point { coordinates: Coordinates },
}

/// Feature properties: the fixed `style` block plus arbitrary key/value
/// pairs merged in from the placemark's ExtendedData.
///
/// The two namespaces are structurally distinct: an ExtendedData entry can
/// never displace the `style` field.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Properties {
    pub style: Style,
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

/// A single GeoJSON Feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

/// The top-level GeoJSON FeatureCollection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}
