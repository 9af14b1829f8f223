//
// Copyright (c) ShuYu Wang <andelf@gmail.com>, Feather Workshop and Pirmin Kalberer. All rights reserved.
//

//! Read Well-Known Text geometries and write them as GeoJSON.
//!
//! - Whitespace normalization of hand-written or pasted WKT
//! - WKT reader for all seven OGC simple feature types
//! - GeoJSON geometry writer
//! - EWKB writer (PostGIS binary format)
//!
//! ```rust
//! use wkt_geojson::{normalize, parse, to_geojson};
//!
//! let raw = "LINESTRING (\n  -72.93 41.31,\n  -72.78 41.67\n)";
//! let route = parse(&normalize(raw), "route 66").unwrap();
//! assert_eq!(route.label, "route 66");
//! assert_eq!(
//!     to_geojson(&route).to_string(),
//!     r#"{"coordinates":[[-72.93,41.31],[-72.78,41.67]],"type":"LineString"}"#
//! );
//! ```
//!
//! Handling errors:
//!
//! ```rust
//! use wkt_geojson::{parse, Error};
//!
//! match parse("POLYGON ((1 2, 3 4)", "broken") {
//!     Ok(geom) => { println!("{:?}", geom) }
//!     Err(Error::MalformedStructure(msg)) => { println!("bad WKT: {}", msg) }
//!     Err(err) => { println!("Error: {}", err) }
//! }
//! ```

pub mod error;
mod types;
pub use types::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
pub mod ewkb;
pub mod geojson;
mod normalize;
pub mod wkt;

pub use crate::error::{Error, ParseError, Result};
pub use crate::normalize::normalize;
pub use crate::wkt::{Geometry, LabeledGeometry, ReadOptions};

use crate::geojson::ToGeoJson;
use crate::wkt::WktGeom;
use serde_json::Value;

/// Parses a WKT string into a geometry carrying `label`.
pub fn parse(wkt: &str, label: &str) -> Result<LabeledGeometry> {
    parse_with_options(wkt, label, &ReadOptions::default())
}

pub fn parse_with_options(wkt: &str, label: &str, options: &ReadOptions) -> Result<LabeledGeometry> {
    let geometry = Geometry::read_wkt_with(wkt, options)?;
    Ok(LabeledGeometry::new(label, geometry))
}

/// GeoJSON geometry object for `geometry`. The label is not part of it.
pub fn to_geojson(geometry: &LabeledGeometry) -> Value {
    geometry.geometry.to_geojson()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::wkt::Point;
    use serde_json::json;

    #[test]
    fn test_multipoint_syntaxes() {
        let wrapped = parse("MULTIPOINT ((1 2),(3 4))", "l").unwrap();
        let bare = parse("MULTIPOINT (1 2, 3 4)", "l").unwrap();
        assert_eq!(wrapped, bare);
    }

    #[test]
    fn test_collection() {
        let geom = parse("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (1 2, 3 4))", "l").unwrap();
        match geom.geometry {
            Geometry::GeometryCollection(ref collection) => {
                assert_eq!(collection.geometries.len(), 2);
                assert_eq!(collection.geometries[0], Geometry::Point(Point::new(1.0, 2.0)));
                match collection.geometries[1] {
                    Geometry::LineString(ref line) => assert_eq!(line.points.len(), 2),
                    ref other => panic!("unexpected {:?}", other),
                }
            }
            ref other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_coordinate_order() {
        let geom = parse("LINESTRING (-72.93 41.31, -72.78 41.67)", "l").unwrap();
        match geom.geometry {
            Geometry::LineString(ref line) => {
                assert_eq!(line.points, vec![Point::new(-72.93, 41.31), Point::new(-72.78, 41.67)]);
            }
            ref other => panic!("unexpected {:?}", other),
        }
        let geojson = serde_json::to_string(&to_geojson(&geom)).unwrap();
        assert!(geojson.contains(r#""coordinates":[[-72.93,41.31],[-72.78,41.67]]"#));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("POLYGON ((1 2, 3 4)", "l"), Err(Error::MalformedStructure(_))));
        assert!(matches!(parse("POINT (a b)", "l"), Err(Error::InvalidCoordinate(_))));
        assert!(matches!(parse("CIRCLE (0 0 5)", "l"), Err(Error::UnknownGeometryType(_))));

        let options = ReadOptions { max_depth: 1 };
        let nested = "GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (POINT (1 2)))";
        assert!(matches!(parse_with_options(nested, "l", &options), Err(Error::RecursionLimitExceeded(1))));
        assert!(parse(nested, "l").is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = parse("POINT (1 x)", "l").unwrap_err();
        assert_eq!(err.to_string(), "invalid coordinate: x");
        let err = parse("CIRCLE (0 0 5)", "l").unwrap_err();
        assert_eq!(err.to_string(), "unknown geometry type: CIRCLE");
    }

    #[test]
    fn test_normalized_input() {
        let geom = parse(&normalize("POINT (\n  1   2 \n)"), "l").unwrap();
        assert_eq!(geom.geometry, Geometry::Point(Point::new(1.0, 2.0)));
        assert_eq!(to_geojson(&geom), json!({"type": "Point", "coordinates": [1.0, 2.0]}));
    }

    #[test]
    fn test_label_is_kept() {
        let geom = parse("POINT (1 2)", "Town hall").unwrap();
        assert_eq!(geom.label, "Town hall");
        assert!(to_geojson(&geom).get("properties").is_none());
    }
}
