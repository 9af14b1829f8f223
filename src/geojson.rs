//
// Copyright (c) Pirmin Kalberer. All rights reserved.
//

//! Write geometries as [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946) geometry objects.
//!
//! ```rust
//! use wkt_geojson::wkt::{Geometry, WktGeom};
//! use wkt_geojson::geojson::ToGeoJson;
//!
//! let geom = Geometry::read_wkt("LINESTRING (-72.93 41.31, -72.78 41.67)").unwrap();
//! assert_eq!(
//!     geom.to_geojson().to_string(),
//!     r#"{"coordinates":[[-72.93,41.31],[-72.78,41.67]],"type":"LineString"}"#
//! );
//! ```

use crate::types;
use crate::wkt::{Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::{json, Value};


pub trait ToGeoJson {
    fn to_geojson(&self) -> Value;
}

/// GeoJSON `type` member for a geometry kind.
pub fn geojson_type(geometry_type: GeometryType) -> &'static str {
    match geometry_type {
        GeometryType::Point => "Point",
        GeometryType::LineString => "LineString",
        GeometryType::Polygon => "Polygon",
        GeometryType::MultiPoint => "MultiPoint",
        GeometryType::MultiLineString => "MultiLineString",
        GeometryType::MultiPolygon => "MultiPolygon",
        GeometryType::GeometryCollection => "GeometryCollection",
    }
}

// --- coordinate arrays

pub fn point_coordinates<P: types::Point>(point: &P) -> Value {
    json!([point.x(), point.y()])
}

pub fn line_coordinates<'a, L: types::LineString<'a>>(line: &'a L) -> Value {
    Value::Array(line.points().map(|point| point_coordinates(point)).collect())
}

pub fn polygon_coordinates<'a, Y: types::Polygon<'a>>(polygon: &'a Y) -> Value {
    Value::Array(polygon.rings().map(|ring| line_coordinates(ring)).collect())
}

pub fn multi_point_coordinates<'a, M: types::MultiPoint<'a>>(multi: &'a M) -> Value {
    Value::Array(multi.points().map(|point| point_coordinates(point)).collect())
}

pub fn multi_line_coordinates<'a, M: types::MultiLineString<'a>>(multi: &'a M) -> Value {
    Value::Array(multi.lines().map(|line| line_coordinates(line)).collect())
}

pub fn multi_polygon_coordinates<'a, M: types::MultiPolygon<'a>>(multi: &'a M) -> Value {
    Value::Array(multi.polygons().map(|polygon| polygon_coordinates(polygon)).collect())
}

fn geometry_object(geometry_type: GeometryType, coordinates: Value) -> Value {
    json!({
        "type": geojson_type(geometry_type),
        "coordinates": coordinates,
    })
}

// ---

impl ToGeoJson for Point {
    fn to_geojson(&self) -> Value {
        geometry_object(GeometryType::Point, point_coordinates(self))
    }
}

impl ToGeoJson for LineString {
    fn to_geojson(&self) -> Value {
        geometry_object(GeometryType::LineString, line_coordinates(self))
    }
}

impl ToGeoJson for Polygon {
    fn to_geojson(&self) -> Value {
        geometry_object(GeometryType::Polygon, polygon_coordinates(self))
    }
}

impl ToGeoJson for MultiPoint {
    fn to_geojson(&self) -> Value {
        geometry_object(GeometryType::MultiPoint, multi_point_coordinates(self))
    }
}

impl ToGeoJson for MultiLineString {
    fn to_geojson(&self) -> Value {
        geometry_object(GeometryType::MultiLineString, multi_line_coordinates(self))
    }
}

impl ToGeoJson for MultiPolygon {
    fn to_geojson(&self) -> Value {
        geometry_object(GeometryType::MultiPolygon, multi_polygon_coordinates(self))
    }
}

impl ToGeoJson for GeometryCollection {
    fn to_geojson(&self) -> Value {
        let geometries: Vec<Value> = self.geometries().map(|geom| geom.to_geojson()).collect();
        json!({
            "type": geojson_type(GeometryType::GeometryCollection),
            "geometries": geometries,
        })
    }
}

impl ToGeoJson for Geometry {
    fn to_geojson(&self) -> Value {
        match *self {
            Geometry::Point(ref geom) => geom.to_geojson(),
            Geometry::LineString(ref geom) => geom.to_geojson(),
            Geometry::Polygon(ref geom) => geom.to_geojson(),
            Geometry::MultiPoint(ref geom) => geom.to_geojson(),
            Geometry::MultiLineString(ref geom) => geom.to_geojson(),
            Geometry::MultiPolygon(ref geom) => geom.to_geojson(),
            Geometry::GeometryCollection(ref geom) => geom.to_geojson(),
        }
    }
}


#[cfg(test)]
use crate::wkt::WktGeom;

#[test]
fn test_write_point() {
    let point = Point::read_wkt("POINT (10 -20)").unwrap();
    assert_eq!(point.to_geojson(), json!({"type": "Point", "coordinates": [10.0, -20.0]}));
}

#[test]
fn test_write_line() {
    let line = LineString::read_wkt("LINESTRING (-72.93 41.31, -72.78 41.67)").unwrap();
    let geojson = line.to_geojson();
    assert_eq!(geojson["type"], "LineString");
    assert_eq!(geojson["coordinates"].to_string(), "[[-72.93,41.31],[-72.78,41.67]]");
}

#[test]
fn test_write_polygon() {
    let polygon = Polygon::read_wkt("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0),(10 10, -2 10, -2 -2, 10 -2, 10 10))").unwrap();
    assert_eq!(polygon.to_geojson(), json!({
        "type": "Polygon",
        "coordinates": [
            [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]],
            [[10.0, 10.0], [-2.0, 10.0], [-2.0, -2.0], [10.0, -2.0], [10.0, 10.0]],
        ],
    }));
}

#[test]
fn test_write_multipoint() {
    let wrapped = Geometry::read_wkt("MULTIPOINT ((10 -20), (0 -0.5))").unwrap();
    let bare = Geometry::read_wkt("MULTIPOINT (10 -20, 0 -0.5)").unwrap();
    let expected = json!({"type": "MultiPoint", "coordinates": [[10.0, -20.0], [0.0, -0.5]]});
    assert_eq!(wrapped.to_geojson(), expected);
    assert_eq!(bare.to_geojson(), expected);

    let empty = Geometry::read_wkt("MULTIPOINT EMPTY").unwrap();
    assert_eq!(empty.to_geojson(), json!({"type": "MultiPoint", "coordinates": []}));
}

#[test]
fn test_write_multiline() {
    let lines = MultiLineString::read_wkt("MULTILINESTRING ((10 -20, 0 -0.5), (0 0, 2 0))").unwrap();
    assert_eq!(lines.to_geojson(), json!({
        "type": "MultiLineString",
        "coordinates": [[[10.0, -20.0], [0.0, -0.5]], [[0.0, 0.0], [2.0, 0.0]]],
    }));
}

#[test]
fn test_write_multipolygon() {
    let polygons = MultiPolygon::read_wkt("MULTIPOLYGON (((0 0, 2 0, 2 2, 0 0)), ((1 1, 3 1, 3 3, 1 1)))").unwrap();
    assert_eq!(polygons.to_geojson(), json!({
        "type": "MultiPolygon",
        "coordinates": [
            [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]],
            [[[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 1.0]]],
        ],
    }));
}

#[test]
fn test_write_collection() {
    let geom = Geometry::read_wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (1 2, 3 4), GEOMETRYCOLLECTION EMPTY)").unwrap();
    assert_eq!(geom.to_geojson(), json!({
        "type": "GeometryCollection",
        "geometries": [
            {"type": "Point", "coordinates": [1.0, 2.0]},
            {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]},
            {"type": "GeometryCollection", "geometries": []},
        ],
    }));
}

#[test]
fn test_type_names() {
    let inputs = [
        ("POINT (1 2)", "Point"),
        ("LINESTRING (1 2, 3 4)", "LineString"),
        ("POLYGON ((0 0, 1 0, 1 1, 0 0))", "Polygon"),
        ("MULTIPOINT (1 2)", "MultiPoint"),
        ("MULTILINESTRING ((1 2, 3 4))", "MultiLineString"),
        ("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)))", "MultiPolygon"),
        ("GEOMETRYCOLLECTION (POINT (1 2))", "GeometryCollection"),
    ];
    for &(wkt, name) in inputs.iter() {
        let geom = Geometry::read_wkt(wkt).unwrap();
        assert_eq!(geom.to_geojson()["type"], name);
        assert_eq!(geojson_type(geom.geometry_type()), name);
    }
}
