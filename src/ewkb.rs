//
// Copyright (c) ShuYu Wang <andelf@gmail.com>, Feather Workshop and Pirmin Kalberer. All rights reserved.
//

//! Write geometries as PostGIS [EWKB](https://postgis.net/docs/using_postgis_dbmanagement.html#EWKB_EWKT).
//!
//! ```rust
//! use wkt_geojson::wkt::{Point, WktGeom};
//! use wkt_geojson::ewkb::EwkbWrite;
//!
//! let point = Point::read_wkt("POINT (10 -20)").unwrap();
//! assert_eq!(point.with_srid(4326).to_hex_ewkb(), "0101000020E6100000000000000000244000000000000034C0");
//! ```

use crate::error::Result;
use crate::types;
use crate::wkt::{Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::prelude::*;


/// A geometry paired with the SRID written into its EWKB header.
#[derive(PartialEq, Clone, Debug)]
pub struct EwkbGeometry<'a, G: 'a> {
    pub geom: &'a G,
    pub srid: Option<i32>,
}

pub trait EwkbWrite {
    fn type_id(&self) -> u32;

    fn opt_srid(&self) -> Option<i32> {
        None
    }

    fn write_ewkb<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        // use LE
        w.write_u8(0x01)?;
        let mut type_id = self.type_id();
        if self.opt_srid().is_some() {
            type_id |= 0x20000000;
        }
        w.write_u32::<LittleEndian>(type_id)?;
        if let Some(srid) = self.opt_srid() {
            w.write_i32::<LittleEndian>(srid)?;
        }
        self.write_ewkb_body(w)
    }

    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()>;

    fn to_hex_ewkb(&self) -> String {
        let mut buf: Vec<u8> = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_ewkb(&mut buf);
        buf.iter().map(|b| format!("{:02X}", b)).collect()
    }

    fn with_srid(&self, srid: i32) -> EwkbGeometry<Self> where Self: Sized {
        EwkbGeometry { geom: self, srid: Some(srid) }
    }
}

impl<'a, G: EwkbWrite> EwkbWrite for EwkbGeometry<'a, G> {
    fn type_id(&self) -> u32 {
        self.geom.type_id()
    }
    fn opt_srid(&self) -> Option<i32> {
        self.srid
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.geom.write_ewkb_body(w)
    }
}

// --- body writers, generic over the container traits

fn write_point<W: Write + ?Sized, P: types::Point>(w: &mut W, point: &P) -> Result<()> {
    w.write_f64::<LittleEndian>(point.x())?;
    w.write_f64::<LittleEndian>(point.y())?;
    Ok(())
}

fn write_count<W: Write + ?Sized>(w: &mut W, len: usize) -> Result<()> {
    w.write_u32::<LittleEndian>(len as u32)?;
    Ok(())
}

fn write_line<'a, W: Write + ?Sized, L: types::LineString<'a>>(w: &mut W, line: &'a L) -> Result<()> {
    let points = line.points();
    write_count(w, points.len())?;
    for point in points {
        write_point(w, point)?;
    }
    Ok(())
}

fn write_polygon<'a, W: Write + ?Sized, Y: types::Polygon<'a>>(w: &mut W, polygon: &'a Y) -> Result<()> {
    let rings = polygon.rings();
    write_count(w, rings.len())?;
    for ring in rings {
        write_line(w, ring)?;
    }
    Ok(())
}

/// Multi-geometry members are complete EWKB geometries without SRID.
fn write_members<'a, W, G, I>(w: &mut W, members: I) -> Result<()>
    where W: Write + ?Sized,
          G: 'a + EwkbWrite,
          I: ExactSizeIterator<Item=&'a G>
{
    write_count(w, members.len())?;
    for member in members {
        member.write_ewkb(w)?;
    }
    Ok(())
}

// ---

impl EwkbWrite for Point {
    fn type_id(&self) -> u32 {
        0x01
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_point(w, self)
    }
}

impl EwkbWrite for LineString {
    fn type_id(&self) -> u32 {
        0x02
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_line(w, self)
    }
}

impl EwkbWrite for Polygon {
    fn type_id(&self) -> u32 {
        0x03
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_polygon(w, self)
    }
}

impl EwkbWrite for MultiPoint {
    fn type_id(&self) -> u32 {
        0x04
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_members(w, self.points.iter())
    }
}

impl EwkbWrite for MultiLineString {
    fn type_id(&self) -> u32 {
        0x05
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_members(w, self.lines.iter())
    }
}

impl EwkbWrite for MultiPolygon {
    fn type_id(&self) -> u32 {
        0x06
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_members(w, self.polygons.iter())
    }
}

impl EwkbWrite for GeometryCollection {
    fn type_id(&self) -> u32 {
        0x07
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        write_members(w, self.geometries.iter())
    }
}

impl EwkbWrite for Geometry {
    fn type_id(&self) -> u32 {
        match *self {
            Geometry::Point(ref geom) => geom.type_id(),
            Geometry::LineString(ref geom) => geom.type_id(),
            Geometry::Polygon(ref geom) => geom.type_id(),
            Geometry::MultiPoint(ref geom) => geom.type_id(),
            Geometry::MultiLineString(ref geom) => geom.type_id(),
            Geometry::MultiPolygon(ref geom) => geom.type_id(),
            Geometry::GeometryCollection(ref geom) => geom.type_id(),
        }
    }
    fn write_ewkb_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        match *self {
            Geometry::Point(ref geom) => geom.write_ewkb_body(w),
            Geometry::LineString(ref geom) => geom.write_ewkb_body(w),
            Geometry::Polygon(ref geom) => geom.write_ewkb_body(w),
            Geometry::MultiPoint(ref geom) => geom.write_ewkb_body(w),
            Geometry::MultiLineString(ref geom) => geom.write_ewkb_body(w),
            Geometry::MultiPolygon(ref geom) => geom.write_ewkb_body(w),
            Geometry::GeometryCollection(ref geom) => geom.write_ewkb_body(w),
        }
    }
}


#[cfg(test)]
use crate::wkt::WktGeom;

#[test]
fn test_write_point() {
    // 'POINT (10 -20)'
    let point = Point::read_wkt("POINT (10 -20)").unwrap();
    assert_eq!(point.to_hex_ewkb(), "0101000000000000000000244000000000000034C0");

    // 'SRID=4326;POINT (10 -20)'
    assert_eq!(point.with_srid(4326).to_hex_ewkb(), "0101000020E6100000000000000000244000000000000034C0");
}

#[test]
fn test_write_line() {
    // 'LINESTRING (10 -20, -0 -0.5)'
    let line = LineString::read_wkt("LINESTRING (10 -20, 0 -0.5)").unwrap();
    assert_eq!(line.to_hex_ewkb(), "010200000002000000000000000000244000000000000034C00000000000000000000000000000E0BF");

    // 'SRID=4326;LINESTRING (10 -20, -0 -0.5)'
    assert_eq!(line.with_srid(4326).to_hex_ewkb(), "0102000020E610000002000000000000000000244000000000000034C00000000000000000000000000000E0BF");
}

#[test]
fn test_write_polygon() {
    let polygon = Polygon::read_wkt("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0),(10 10, -2 10, -2 -2, 10 -2, 10 10))").unwrap();
    assert_eq!(polygon.to_hex_ewkb(), "010300000002000000050000000000000000000000000000000000000000000000000000400000000000000000000000000000004000000000000000400000000000000000000000000000004000000000000000000000000000000000050000000000000000002440000000000000244000000000000000C0000000000000244000000000000000C000000000000000C0000000000000244000000000000000C000000000000024400000000000002440");
}

#[test]
fn test_write_multipoint() {
    let multipoint = MultiPoint::read_wkt("MULTIPOINT ((10 -20), (0 -0.5))").unwrap();
    assert_eq!(multipoint.to_hex_ewkb(), "0104000000020000000101000000000000000000244000000000000034C001010000000000000000000000000000000000E0BF");
}

#[test]
fn test_write_multiline() {
    let multiline = MultiLineString::read_wkt("MULTILINESTRING ((10 -20, 0 -0.5), (0 0, 2 0))").unwrap();
    assert_eq!(multiline.to_hex_ewkb(), "010500000002000000010200000002000000000000000000244000000000000034C00000000000000000000000000000E0BF0102000000020000000000000000000000000000000000000000000000000000400000000000000000");
}

#[test]
fn test_write_multipoly() {
    let multipoly = MultiPolygon::read_wkt("MULTIPOLYGON (((0 0, 2 0, 2 2, 0 2, 0 0)), ((10 10, -2 10, -2 -2, 10 -2, 10 10)))").unwrap();
    assert_eq!(multipoly.to_hex_ewkb(), "010600000002000000010300000001000000050000000000000000000000000000000000000000000000000000400000000000000000000000000000004000000000000000400000000000000000000000000000004000000000000000000000000000000000010300000001000000050000000000000000002440000000000000244000000000000000C0000000000000244000000000000000C000000000000000C0000000000000244000000000000000C000000000000024400000000000002440");
}

#[test]
fn test_write_collection() {
    let geom = Geometry::read_wkt("GEOMETRYCOLLECTION (POINT (10 -20), LINESTRING (10 -20, 0 -0.5))").unwrap();
    // members never carry the SRID
    assert_eq!(geom.with_srid(4326).to_hex_ewkb(), "0107000020E6100000020000000101000000000000000000244000000000000034C0010200000002000000000000000000244000000000000034C00000000000000000000000000000E0BF");

    let empty = Geometry::read_wkt("GEOMETRYCOLLECTION EMPTY").unwrap();
    assert_eq!(empty.to_hex_ewkb(), "010700000000000000");
}
