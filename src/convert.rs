//! KML to GeoJSON conversion pipeline

use crate::coordinates::parse_coordinate_string;
use crate::geojson::{Feature, FeatureCollection, Geometry, Properties};
use crate::style::extract_style;
use crate::xml::{self, XmlError, XmlValue};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] XmlError),

    #[error("missing required element: {0}")]
    MissingElement(&'static str),
}

/// Convert a KML document into a GeoJSON FeatureCollection.
///
/// Supports placemarks with a Point geometry, optional ExtendedData
/// key/value properties, and an optional `Style/IconStyle` block. Malformed
/// XML fails the conversion, as does a document without
/// `kml/Document/Placemark` or a placemark without `Point/coordinates`;
/// there is no partial-result mode.
pub async fn convert_kml_to_geojson(kml: &str) -> Result<FeatureCollection, ConvertError> {
    let tree = xml::parse_xml(kml)?;

    let placemarks = tree
        .get("kml")
        .and_then(|kml| kml.get("Document"))
        .and_then(|document| document.get("Placemark"))
        .ok_or(ConvertError::MissingElement("kml.Document.Placemark"))?;

    let features = placemarks
        .items()
        .iter()
        .map(convert_placemark)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(features = features.len(), "converted KML document");

    Ok(FeatureCollection { features })
}

fn convert_placemark(placemark: &XmlValue) -> Result<Feature, ConvertError> {
    let coordinates = placemark
        .get("Point")
        .and_then(|point| point.get("coordinates"))
        .and_then(XmlValue::as_text)
        .ok_or(ConvertError::MissingElement("Placemark.Point.coordinates"))?;

    let mut properties = Properties::default();

    if let Some(data) = placemark
        .get("ExtendedData")
        .and_then(|extended| extended.get("Data"))
    {
        for entry in data.items() {
            let key = entry.get("displayName").and_then(XmlValue::as_text);
            let value = entry.get("value").and_then(XmlValue::as_text);
            match (key, value) {
                // "style" is reserved for the icon style block, which always
                // takes precedence over a colliding ExtendedData entry.
                (Some("style"), _) => {}
                (Some(key), Some(value)) => {
                    properties.extra.insert(key.to_owned(), value.to_owned());
                }
                _ => warn!("skipping ExtendedData entry without displayName/value"),
            }
        }
    }

    let geometry = Geometry::Point {
        coordinates: parse_coordinate_string(coordinates),
    };

    properties.style = extract_style(placemark.get("Style"));

    Ok(Feature {
        properties,
        geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Coordinates;

    const SINGLE_PLACEMARK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Office</name>
      <Point>
        <coordinates>-122.1,37.4,10</coordinates>
      </Point>
    </Placemark>
  </Document>
</kml>"#;

    #[tokio::test]
    async fn test_single_placemark_document_converts() {
        let collection = convert_kml_to_geojson(SINGLE_PLACEMARK)
            .await
            .expect("conversion failed");

        assert_eq!(collection.features.len(), 1);
        let Geometry::Point { coordinates } = &collection.features[0].geometry;
        assert_eq!(coordinates, &Coordinates::Single([-122.1, 37.4, 10.0]));
    }

    #[tokio::test]
    async fn test_missing_placemark_fails() {
        let kml = "<kml><Document></Document></kml>";
        assert!(matches!(
            convert_kml_to_geojson(kml).await,
            Err(ConvertError::MissingElement("kml.Document.Placemark"))
        ));
    }

    #[tokio::test]
    async fn test_missing_coordinates_fails() {
        let kml = "<kml><Document><Placemark><name>x</name></Placemark></Document></kml>";
        assert!(matches!(
            convert_kml_to_geojson(kml).await,
            Err(ConvertError::MissingElement("Placemark.Point.coordinates"))
        ));
    }

    #[tokio::test]
    async fn test_malformed_xml_fails() {
        assert!(matches!(
            convert_kml_to_geojson("<kml><Document>").await,
            Err(ConvertError::Xml(_))
        ));
    }

    #[tokio::test]
    async fn test_extended_data_entry_without_value_is_skipped() {
        let kml = "<kml><Document><Placemark>\
                   <ExtendedData><Data><displayName>orphan</displayName></Data></ExtendedData>\
                   <Point><coordinates>0,0,0</coordinates></Point>\
                   </Placemark></Document></kml>";
        let collection = convert_kml_to_geojson(kml).await.expect("conversion failed");
        assert!(collection.features[0].properties.extra.is_empty());
    }
}
