//! Read WKT text into a [`Geometry`].

use std::io::Read;

use tracing::debug;

use crate::error::WktResult;
use crate::geometry::Geometry;

pub use parser::WktReader;
pub use token::{Keyword, Token, TokenKind, Tokenizer};

mod parser;
mod token;

/// Parse one WKT literal.
///
/// ```
/// use wkt_reader::geometry::{CoordinateType, Geometry, Point};
/// use wkt_reader::io::wkt::parse_wkt;
///
/// let geom = parse_wkt("POINT Z (30.2 20.7 34.777)").unwrap();
/// assert_eq!(geom.coord_type(), CoordinateType::XYZ);
/// assert_eq!(geom, Geometry::Point(Point::new_z(30.2, 20.7, 34.777)));
/// ```
pub fn parse_wkt(input: &str) -> WktResult<Geometry> {
    WktReader::new(input).read_geometry().map_err(|err| {
        debug!(error = %err, "failed to parse WKT");
        err
    })
}

/// Read a WKT literal from a UTF-8 byte stream.
///
/// The stream is read to its end before parsing starts.
pub fn read_wkt<R: Read>(mut reader: R) -> WktResult<Geometry> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_wkt(&input)
}
