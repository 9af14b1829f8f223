//
// Copyright (c) Pirmin Kalberer. All rights reserved.
//

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown geometry type: {0}")]
    UnknownGeometryType(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("malformed structure: {0}")]
    MalformedStructure(String),
    #[error("geometry collections nested deeper than {0} levels")]
    RecursionLimitExceeded(usize),
    #[error("error while writing: {0}")]
    Write(#[from] io::Error),
}

/// Errors returned while reading WKT text.
pub type ParseError = Error;

pub type Result<T> = std::result::Result<T, Error>;
