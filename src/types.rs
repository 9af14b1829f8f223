//
// Copyright (c) Pirmin Kalberer. All rights reserved.
//

//! Read-only views over geometry containers.
//!
//! The writers in [`geojson`](crate::geojson) and [`ewkb`](crate::ewkb) only
//! need to walk coordinates, so they are generic over these traits rather
//! than over the concrete structs in [`wkt`](crate::wkt).

pub trait Point {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

pub trait LineString<'a> {
    type ItemType: 'a + Point;
    type Iter: Iterator<Item=&'a Self::ItemType> + ExactSizeIterator;
    fn points(&'a self) -> Self::Iter;
}

pub trait Polygon<'a> {
    type ItemType: 'a + LineString<'a>;
    type Iter: Iterator<Item=&'a Self::ItemType> + ExactSizeIterator;
    fn rings(&'a self) -> Self::Iter;
}

pub trait MultiPoint<'a> {
    type ItemType: 'a + Point;
    type Iter: Iterator<Item=&'a Self::ItemType> + ExactSizeIterator;
    fn points(&'a self) -> Self::Iter;
}

pub trait MultiLineString<'a> {
    type ItemType: 'a + LineString<'a>;
    type Iter: Iterator<Item=&'a Self::ItemType> + ExactSizeIterator;
    fn lines(&'a self) -> Self::Iter;
}

pub trait MultiPolygon<'a> {
    type ItemType: 'a + Polygon<'a>;
    type Iter: Iterator<Item=&'a Self::ItemType> + ExactSizeIterator;
    fn polygons(&'a self) -> Self::Iter;
}
