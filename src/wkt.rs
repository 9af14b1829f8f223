//
// Copyright (c) Pirmin Kalberer. All rights reserved.
//

//! Read geometries in [Well-Known Text](https://www.ogc.org/standard/sfa/) format.
//!
//! ```rust
//! use wkt_geojson::wkt::{Geometry, LineString, WktGeom};
//! use wkt_geojson::LineString as _;
//!
//! let route = LineString::read_wkt("LINESTRING (-72.93 41.31, -72.78 41.67)").unwrap();
//! assert_eq!(route.points().count(), 2);
//!
//! let geom = Geometry::read_wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (1 2, 3 4))").unwrap();
//! assert_eq!(geom.to_string(), "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (1 2, 3 4))");
//! ```

use crate::error::{Error, Result};
use crate::types;
use std::fmt;
use std::slice::Iter;


#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(PartialEq, Clone, Debug)]
pub struct LineString {
    pub points: Vec<Point>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct Polygon {
    pub rings: Vec<LineString>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
}

/// Any geometry a WKT string can describe.
#[derive(PartialEq, Clone, Debug)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// A geometry tagged with a caller-supplied name.
#[derive(PartialEq, Clone, Debug)]
pub struct LabeledGeometry {
    pub label: String,
    pub geometry: Geometry,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReadOptions {
    /// Deepest GEOMETRYCOLLECTION nesting accepted. The outermost geometry
    /// sits at depth 0.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions { max_depth: 32 }
    }
}

// --- Tokenizer

#[derive(PartialEq, Clone, Copy, Debug)]
enum Token<'a> {
    Word(&'a str),
    LParen,
    RParen,
    Comma,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Word(word) => write!(f, "'{}'", word),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
        }
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        let delimiter = match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            _ => None,
        };
        if delimiter.is_some() || ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(Token::Word(&text[start..i]));
            }
            if let Some(token) = delimiter {
                tokens.push(token);
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::Word(&text[start..]));
    }
    tokens
}

fn describe(token: Option<Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

// --- Reader

#[doc(hidden)]
pub struct WktReader<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> WktReader<'a> {
    fn new(text: &'a str, options: &ReadOptions) -> Self {
        WktReader { tokens: tokenize(text), pos: 0, depth: 0, max_depth: options.max_depth }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn finish(&self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(Error::MalformedStructure(format!("trailing content {} after geometry", token))),
        }
    }

    fn read_keyword(&mut self) -> Result<GeometryType> {
        match self.next() {
            Some(Token::Word(word)) => GeometryType::from_keyword(word)
                .ok_or_else(|| Error::UnknownGeometryType(word.to_string())),
            token => Err(Error::UnknownGeometryType(format!("expected geometry keyword, found {}", describe(token)))),
        }
    }

    fn read_tagged(&mut self, expected: GeometryType) -> Result<()> {
        let found = self.read_keyword()?;
        if found != expected {
            return Err(Error::UnknownGeometryType(format!("expected {}, found {}", expected.keyword(), found.keyword())));
        }
        Ok(())
    }

    fn expect(&mut self, expected: Token, context: &str) -> Result<()> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            token => Err(Error::MalformedStructure(format!("expected {} {}, found {}", expected, context, describe(token)))),
        }
    }

    fn read_number(word: &str) -> Result<f64> {
        match word.parse::<f64>() {
            Ok(val) if val.is_finite() => Ok(val),
            _ => Err(Error::InvalidCoordinate(word.to_string())),
        }
    }

    fn read_point(&mut self) -> Result<Point> {
        // x y
        let x = match self.next() {
            Some(Token::Word(word)) => word,
            token => return Err(Error::MalformedStructure(format!("expected coordinate, found {}", describe(token)))),
        };
        let y = match self.next() {
            Some(Token::Word(word)) => word,
            _ => return Err(Error::InvalidCoordinate(format!("{} (missing y)", x))),
        };
        if let Some(Token::Word(extra)) = self.peek() {
            return Err(Error::InvalidCoordinate(format!("{} {} {}", x, y, extra)));
        }
        Ok(Point { x: Self::read_number(x)?, y: Self::read_number(y)? })
    }

    /// Reads `(item, item, ...)`. With `allow_empty`, `()` yields no items.
    fn read_list<T, F>(&mut self, context: &str, allow_empty: bool, mut read_item: F) -> Result<Vec<T>>
        where F: FnMut(&mut Self) -> Result<T>
    {
        self.expect(Token::LParen, context)?;
        let mut items = Vec::new();
        if allow_empty && self.peek() == Some(Token::RParen) {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(read_item(self)?);
            match self.next() {
                Some(Token::Comma) => continue,
                Some(Token::RParen) => return Ok(items),
                token => return Err(Error::MalformedStructure(format!("expected ',' or ')' {}, found {}", context, describe(token)))),
            }
        }
    }

    /// Body of a multi-geometry or collection: `EMPTY` or a possibly empty list.
    fn read_members<T, F>(&mut self, context: &str, read_item: F) -> Result<Vec<T>>
        where F: FnMut(&mut Self) -> Result<T>
    {
        if let Some(Token::Word(word)) = self.peek() {
            if word.eq_ignore_ascii_case("EMPTY") {
                self.pos += 1;
                return Ok(Vec::new());
            }
        }
        self.read_list(context, true, read_item)
    }

    fn read_points(&mut self, context: &str, min_points: usize) -> Result<Vec<Point>> {
        let points = self.read_list(context, false, Self::read_point)?;
        if points.len() < min_points {
            return Err(Error::MalformedStructure(format!("{} needs at least {} coordinates, found {}", context, min_points, points.len())));
        }
        Ok(points)
    }

    fn nested<T, F>(&mut self, read: F) -> Result<T>
        where F: FnOnce(&mut Self) -> Result<T>
    {
        if self.depth >= self.max_depth {
            return Err(Error::RecursionLimitExceeded(self.max_depth));
        }
        self.depth += 1;
        let result = read(self);
        self.depth -= 1;
        result
    }
}

pub trait WktGeom: fmt::Debug + Sized {
    fn read_wkt(text: &str) -> Result<Self> {
        Self::read_wkt_with(text, &ReadOptions::default())
    }

    fn read_wkt_with(text: &str, options: &ReadOptions) -> Result<Self> {
        let mut reader = WktReader::new(text, options);
        let geom = Self::read_wkt_tagged(&mut reader).and_then(|geom| reader.finish().map(|_| geom));
        if let Err(ref err) = geom {
            log::debug!("rejected WKT {:?}: {}", text, err);
        }
        geom
    }

    #[doc(hidden)]
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self>;
}

// ---

impl GeometryType {
    pub fn from_keyword(word: &str) -> Option<Self> {
        let types = [
            GeometryType::Point,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::MultiPoint,
            GeometryType::MultiLineString,
            GeometryType::MultiPolygon,
            GeometryType::GeometryCollection,
        ];
        types.iter().copied().find(|t| t.keyword().eq_ignore_ascii_case(word))
    }

    pub fn keyword(&self) -> &'static str {
        match *self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x: x, y: y }
    }

    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        reader.expect(Token::LParen, "after POINT")?;
        let point = reader.read_point()?;
        reader.expect(Token::RParen, "after POINT coordinate")?;
        Ok(point)
    }
}

impl types::Point for Point {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl WktGeom for Point {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::Point)?;
        Self::read_wkt_body(reader)
    }
}


impl LineString {
    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        let points = reader.read_points("in LINESTRING", 2)?;
        Ok(LineString { points: points })
    }

    fn read_ring(reader: &mut WktReader) -> Result<Self> {
        // closure is left to the caller
        let points = reader.read_points("in ring", 4)?;
        Ok(LineString { points: points })
    }
}

impl<'a> types::LineString<'a> for LineString {
    type ItemType = Point;
    type Iter = Iter<'a, Self::ItemType>;
    fn points(&'a self) -> Self::Iter {
        self.points.iter()
    }
}

impl WktGeom for LineString {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::LineString)?;
        Self::read_wkt_body(reader)
    }
}


impl Polygon {
    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        let rings = reader.read_list("in POLYGON", false, LineString::read_ring)?;
        Ok(Polygon { rings: rings })
    }
}

impl<'a> types::Polygon<'a> for Polygon {
    type ItemType = LineString;
    type Iter = Iter<'a, Self::ItemType>;
    fn rings(&'a self) -> Self::Iter {
        self.rings.iter()
    }
}

impl WktGeom for Polygon {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::Polygon)?;
        Self::read_wkt_body(reader)
    }
}


impl MultiPoint {
    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        // both `(x y)` and bare `x y` members, decided per member
        let points = reader.read_members("in MULTIPOINT", |reader| {
            if reader.peek() == Some(Token::LParen) {
                reader.pos += 1;
                let point = reader.read_point()?;
                reader.expect(Token::RParen, "after MULTIPOINT member")?;
                Ok(point)
            } else {
                reader.read_point()
            }
        })?;
        Ok(MultiPoint { points: points })
    }
}

impl<'a> types::MultiPoint<'a> for MultiPoint {
    type ItemType = Point;
    type Iter = Iter<'a, Self::ItemType>;
    fn points(&'a self) -> Self::Iter {
        self.points.iter()
    }
}

impl WktGeom for MultiPoint {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::MultiPoint)?;
        Self::read_wkt_body(reader)
    }
}


impl MultiLineString {
    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        let lines = reader.read_members("in MULTILINESTRING", LineString::read_wkt_body)?;
        Ok(MultiLineString { lines: lines })
    }
}

impl<'a> types::MultiLineString<'a> for MultiLineString {
    type ItemType = LineString;
    type Iter = Iter<'a, Self::ItemType>;
    fn lines(&'a self) -> Self::Iter {
        self.lines.iter()
    }
}

impl WktGeom for MultiLineString {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::MultiLineString)?;
        Self::read_wkt_body(reader)
    }
}


impl MultiPolygon {
    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        let polygons = reader.read_members("in MULTIPOLYGON", Polygon::read_wkt_body)?;
        Ok(MultiPolygon { polygons: polygons })
    }
}

impl<'a> types::MultiPolygon<'a> for MultiPolygon {
    type ItemType = Polygon;
    type Iter = Iter<'a, Self::ItemType>;
    fn polygons(&'a self) -> Self::Iter {
        self.polygons.iter()
    }
}

impl WktGeom for MultiPolygon {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::MultiPolygon)?;
        Self::read_wkt_body(reader)
    }
}


impl GeometryCollection {
    fn read_wkt_body(reader: &mut WktReader) -> Result<Self> {
        let geometries = reader.read_members("in GEOMETRYCOLLECTION", |reader| {
            reader.nested(|reader| Geometry::read_wkt_tagged(reader))
        })?;
        Ok(GeometryCollection { geometries: geometries })
    }

    pub fn geometries(&self) -> Iter<Geometry> {
        self.geometries.iter()
    }
}

impl WktGeom for GeometryCollection {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        reader.read_tagged(GeometryType::GeometryCollection)?;
        Self::read_wkt_body(reader)
    }
}


impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match *self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }
}

impl WktGeom for Geometry {
    fn read_wkt_tagged(reader: &mut WktReader) -> Result<Self> {
        let geometry_type = reader.read_keyword()?;
        log::trace!("reading {} at depth {}", geometry_type.keyword(), reader.depth);
        let geom = match geometry_type {
            GeometryType::Point => Geometry::Point(Point::read_wkt_body(reader)?),
            GeometryType::LineString => Geometry::LineString(LineString::read_wkt_body(reader)?),
            GeometryType::Polygon => Geometry::Polygon(Polygon::read_wkt_body(reader)?),
            GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint::read_wkt_body(reader)?),
            GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineString::read_wkt_body(reader)?),
            GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::read_wkt_body(reader)?),
            GeometryType::GeometryCollection => Geometry::GeometryCollection(GeometryCollection::read_wkt_body(reader)?),
        };
        Ok(geom)
    }
}

impl LabeledGeometry {
    pub fn new<S: Into<String>>(label: S, geometry: Geometry) -> Self {
        LabeledGeometry { label: label.into(), geometry: geometry }
    }
}

// --- WKT output

fn write_points(f: &mut fmt::Formatter, points: &[Point]) -> fmt::Result {
    write!(f, "(")?;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{} {}", point.x, point.y)?;
    }
    write!(f, ")")
}

fn write_rings(f: &mut fmt::Formatter, rings: &[LineString]) -> fmt::Result {
    write!(f, "(")?;
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_points(f, &ring.points)?;
    }
    write!(f, ")")
}

/// Writes `EMPTY` or `(member, member, ...)`.
fn write_members<T, F>(f: &mut fmt::Formatter, members: &[T], mut write_member: F) -> fmt::Result
    where F: FnMut(&mut fmt::Formatter, &T) -> fmt::Result
{
    if members.is_empty() {
        return write!(f, "EMPTY");
    }
    write!(f, "(")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_member(f, member)?;
    }
    write!(f, ")")
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "POINT ({} {})", self.x, self.y)
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LINESTRING ")?;
        write_points(f, &self.points)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "POLYGON ")?;
        write_rings(f, &self.rings)
    }
}

impl fmt::Display for MultiPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MULTIPOINT ")?;
        write_members(f, &self.points, |f, p| write!(f, "({} {})", p.x, p.y))
    }
}

impl fmt::Display for MultiLineString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MULTILINESTRING ")?;
        write_members(f, &self.lines, |f, line| write_points(f, &line.points))
    }
}

impl fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MULTIPOLYGON ")?;
        write_members(f, &self.polygons, |f, poly| write_rings(f, &poly.rings))
    }
}

impl fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GEOMETRYCOLLECTION ")?;
        write_members(f, &self.geometries, |f, geom| write!(f, "{}", geom))
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Geometry::Point(ref geom) => geom.fmt(f),
            Geometry::LineString(ref geom) => geom.fmt(f),
            Geometry::Polygon(ref geom) => geom.fmt(f),
            Geometry::MultiPoint(ref geom) => geom.fmt(f),
            Geometry::MultiLineString(ref geom) => geom.fmt(f),
            Geometry::MultiPolygon(ref geom) => geom.fmt(f),
            Geometry::GeometryCollection(ref geom) => geom.fmt(f),
        }
    }
}


#[cfg(test)]
fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_tokenize() {
    assert_eq!(tokenize("POINT(1 -2.5)"), vec![
        Token::Word("POINT"), Token::LParen, Token::Word("1"), Token::Word("-2.5"), Token::RParen,
    ]);
    assert_eq!(tokenize("  MULTIPOINT (1 2 ,3 4)\n"), vec![
        Token::Word("MULTIPOINT"), Token::LParen, Token::Word("1"), Token::Word("2"), Token::Comma,
        Token::Word("3"), Token::Word("4"), Token::RParen,
    ]);
    assert!(tokenize("").is_empty());
}

#[test]
fn test_read_point() {
    let point = Point::read_wkt("POINT (10 -20)").unwrap();
    assert_eq!(point, p(10.0, -20.0));

    let point = Point::read_wkt("point(1.5e2 .25)").unwrap();
    assert_eq!(point, p(150.0, 0.25));

    let point = Point::read_wkt("POINT (\n  1   2 \n)").unwrap();
    assert_eq!(point, p(1.0, 2.0));
}

#[test]
fn test_read_line() {
    let line = LineString::read_wkt("LINESTRING (-72.93 41.31, -72.78 41.67)").unwrap();
    assert_eq!(line.points, vec![p(-72.93, 41.31), p(-72.78, 41.67)]);

    let err = LineString::read_wkt("LINESTRING (1 2)").unwrap_err();
    assert!(matches!(err, Error::MalformedStructure(_)));

    let err = LineString::read_wkt("LINESTRING (1 2, 3 4").unwrap_err();
    assert!(matches!(err, Error::MalformedStructure(_)));
}

#[test]
fn test_read_polygon() {
    let poly = Polygon::read_wkt("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0),(10 10, -2 10, -2 -2, 10 -2, 10 10))").unwrap();
    assert_eq!(poly.rings.len(), 2);
    assert_eq!(poly.rings[0].points, vec![p(0., 0.), p(2., 0.), p(2., 2.), p(0., 2.), p(0., 0.)]);
    assert_eq!(poly.rings[1].points[1], p(-2., 10.));

    // an unclosed ring is accepted as is
    let poly = Polygon::read_wkt("POLYGON ((0 0, 1 0, 1 1, 0 1))").unwrap();
    assert_eq!(poly.rings[0].points.len(), 4);

    let err = Polygon::read_wkt("POLYGON ((1 2, 3 4)").unwrap_err();
    assert!(matches!(err, Error::MalformedStructure(_)));

    let err = Polygon::read_wkt("POLYGON ((0 0, 1 0, 1 1, 0 0)").unwrap_err();
    assert!(matches!(err, Error::MalformedStructure(_)));

    let err = Polygon::read_wkt("POLYGON ()").unwrap_err();
    assert!(matches!(err, Error::MalformedStructure(_)));
}

#[test]
fn test_read_multipoint() {
    let wrapped = MultiPoint::read_wkt("MULTIPOINT ((1 2),(3 4))").unwrap();
    let bare = MultiPoint::read_wkt("MULTIPOINT (1 2, 3 4)").unwrap();
    assert_eq!(wrapped.points, vec![p(1., 2.), p(3., 4.)]);
    assert_eq!(wrapped, bare);

    let mixed = MultiPoint::read_wkt("MULTIPOINT ((1 2), 3 4)").unwrap();
    assert_eq!(mixed, bare);

    assert!(MultiPoint::read_wkt("MULTIPOINT ()").unwrap().points.is_empty());
    assert!(MultiPoint::read_wkt("MULTIPOINT EMPTY").unwrap().points.is_empty());
}

#[test]
fn test_read_multiline() {
    let lines = MultiLineString::read_wkt("MULTILINESTRING ((10 -20, 0 -0.5), (0 0, 2 0))").unwrap();
    assert_eq!(lines.lines, vec![
        LineString { points: vec![p(10., -20.), p(0., -0.5)] },
        LineString { points: vec![p(0., 0.), p(2., 0.)] },
    ]);
}

#[test]
fn test_read_multipolygon() {
    let polys = MultiPolygon::read_wkt("MULTIPOLYGON (((0 0, 2 0, 2 2, 0 2, 0 0)), ((10 10, -2 10, -2 -2, 10 -2, 10 10), (1 1, 2 1, 2 2, 1 1)))").unwrap();
    assert_eq!(polys.polygons.len(), 2);
    assert_eq!(polys.polygons[0].rings.len(), 1);
    assert_eq!(polys.polygons[1].rings.len(), 2);
    assert_eq!(polys.polygons[1].rings[1].points[0], p(1., 1.));
}

#[test]
fn test_read_collection() {
    let geom = Geometry::read_wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (1 2, 3 4))").unwrap();
    let collection = match geom {
        Geometry::GeometryCollection(collection) => collection,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(collection.geometries.len(), 2);
    assert_eq!(collection.geometries[0], Geometry::Point(p(1., 2.)));
    match collection.geometries[1] {
        Geometry::LineString(ref line) => assert_eq!(line.points.len(), 2),
        ref other => panic!("unexpected {:?}", other),
    }

    let nested = Geometry::read_wkt("GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (POINT (1 2)), MULTIPOINT EMPTY)").unwrap();
    assert_eq!(nested, Geometry::GeometryCollection(GeometryCollection { geometries: vec![
        Geometry::GeometryCollection(GeometryCollection { geometries: vec![Geometry::Point(p(1., 2.))] }),
        Geometry::MultiPoint(MultiPoint { points: vec![] }),
    ]}));
}

#[test]
fn test_recursion_limit() {
    let nest = |depth: usize| {
        let mut wkt = "POINT (1 2)".to_string();
        for _ in 0..depth {
            wkt = format!("GEOMETRYCOLLECTION ({})", wkt);
        }
        wkt
    };
    let options = ReadOptions { max_depth: 3 };
    assert!(Geometry::read_wkt_with(&nest(3), &options).is_ok());
    let err = Geometry::read_wkt_with(&nest(4), &options).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded(3)));

    let err = Geometry::read_wkt(&nest(1_000)).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded(32)));
}

#[test]
fn test_read_errors() {
    assert!(matches!(Geometry::read_wkt("POINT (a b)").unwrap_err(), Error::InvalidCoordinate(ref s) if s == "a"));
    assert!(matches!(Geometry::read_wkt("POINT (1 NaN)").unwrap_err(), Error::InvalidCoordinate(_)));
    assert!(matches!(Geometry::read_wkt("POINT (1 2 3)").unwrap_err(), Error::InvalidCoordinate(_)));
    assert!(matches!(Geometry::read_wkt("POINT (1)").unwrap_err(), Error::InvalidCoordinate(_)));
    assert!(matches!(Geometry::read_wkt("CIRCLE (0 0 5)").unwrap_err(), Error::UnknownGeometryType(ref s) if s == "CIRCLE"));
    assert!(matches!(Geometry::read_wkt("").unwrap_err(), Error::UnknownGeometryType(_)));
    assert!(matches!(Geometry::read_wkt("(1 2)").unwrap_err(), Error::UnknownGeometryType(_)));
    assert!(matches!(Geometry::read_wkt("POINT (1 2))").unwrap_err(), Error::MalformedStructure(_)));
    assert!(matches!(Geometry::read_wkt("POINT (1 2) POINT (3 4)").unwrap_err(), Error::MalformedStructure(_)));
    assert!(matches!(Geometry::read_wkt("POINT ()").unwrap_err(), Error::MalformedStructure(_)));
    assert!(matches!(Geometry::read_wkt("POINT EMPTY").unwrap_err(), Error::MalformedStructure(_)));
    assert!(matches!(Geometry::read_wkt("POINT").unwrap_err(), Error::MalformedStructure(_)));
    assert!(matches!(Geometry::read_wkt("GEOMETRYCOLLECTION (POINT (1 2), CIRCLE (1))").unwrap_err(), Error::UnknownGeometryType(_)));
    assert!(matches!(Point::read_wkt("LINESTRING (1 2, 3 4)").unwrap_err(), Error::UnknownGeometryType(_)));
}

#[test]
fn test_write_wkt() {
    let inputs = [
        "POINT (10 -20)",
        "LINESTRING (-72.93 41.31, -72.78 41.67)",
        "POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0), (10 10, -2 10, -2 -2, 10 -2, 10 10))",
        "MULTIPOINT ((1 2), (3 4))",
        "MULTIPOINT EMPTY",
        "MULTILINESTRING ((10 -20, 0 -0.5), (0 0, 2 0))",
        "MULTIPOLYGON (((0 0, 2 0, 2 2, 0 0)), ((1 1, 3 1, 3 3, 1 1)))",
        "GEOMETRYCOLLECTION (POINT (1 2), GEOMETRYCOLLECTION EMPTY)",
    ];
    for wkt in inputs.iter() {
        let geom = Geometry::read_wkt(wkt).unwrap();
        assert_eq!(&geom.to_string(), wkt);
        assert_eq!(Geometry::read_wkt(&geom.to_string()).unwrap(), geom);
    }
    assert_eq!(MultiPoint::read_wkt("MULTIPOINT (1 2, 3 4)").unwrap().to_string(), "MULTIPOINT ((1 2), (3 4))");
}
