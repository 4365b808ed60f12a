//! KML to GeoJSON converter for point placemark documents
//!
//! This crate converts a KML document (the XML dialect used for geographic
//! annotation) into a GeoJSON FeatureCollection in a single pass. The
//! supported placemark shape is a Point geometry with optional ExtendedData
//! key/value properties and an optional `Style/IconStyle` block.
//!
//! # Features
//!
//! - Streaming XML normalization using quick-xml
//! - Coordinate tuple parsing with best-effort NaN sentinels for bad numbers
//! - Null-defaulted icon style extraction (color and icon href)
//! - ExtendedData merged into feature properties alongside a reserved
//!   `style` block
//!
//! # Example
//!
//! ```rust
//! use kml2geojson::convert_kml_to_geojson;
//!
//! let kml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <kml xmlns="http://www.opengis.net/kml/2.2">
//!   <Document>
//!     <Placemark>
//!       <name>Office</name>
//!       <Point>
//!         <coordinates>-122.1,37.4,10</coordinates>
//!       </Point>
//!     </Placemark>
//!   </Document>
//! </kml>"#;
//!
//! let collection = tokio_test::block_on(convert_kml_to_geojson(kml))
//!     .expect("Failed to convert KML");
//! assert_eq!(collection.features.len(), 1);
//! ```

pub mod convert;
pub mod coordinates;
pub mod geojson;
pub mod style;
pub mod xml;

pub use convert::{convert_kml_to_geojson, ConvertError};
pub use coordinates::{parse_coordinate_string, Coordinates};
pub use geojson::{Feature, FeatureCollection, Geometry, Properties};
pub use style::{extract_style, Style};
pub use xml::{parse_xml, XmlError, XmlValue};
