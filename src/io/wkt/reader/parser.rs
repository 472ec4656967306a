//! Recursive-descent parsing of WKT tokens into a [`Geometry`].

use std::iter::Peekable;

use tracing::trace;

use crate::error::{Context, WktError, WktResult};
use crate::geometry::{
    CircularString, CoordinateType, Dimension, Geometry, GeometryType, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::wkt::reader::token::{Keyword, Token, TokenKind, Tokenizer};

const NUMBER: &str = "a number";
const OPEN: &str = "`(`";
const CLOSE: &str = "`)`";
const COMMA_OR_CLOSE: &str = "`,` or `)`";

/// A cursor over the tokens of one WKT literal.
///
/// Each structural routine is entered right after the opening `(` of the element it parses and
/// returns after consuming that element's closing `)`.
#[derive(Debug)]
pub struct WktReader<'a> {
    tokens: Peekable<Tokenizer<'a>>,
    len: usize,
}

impl<'a> WktReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(input).peekable(),
            len: input.len(),
        }
    }

    /// Parse one geometry, consuming the reader.
    ///
    /// Tokens after the geometry's closing `)` are not examined.
    pub fn read_geometry(mut self) -> WktResult<Geometry> {
        let geometry_type = self.geometry_type()?;
        let coord_type = self.coord_type()?;
        trace!(%geometry_type, %coord_type, "read WKT header");

        let Some(dim) = coord_type.dimension() else {
            return Ok(Geometry::empty(geometry_type));
        };

        let geometry: Geometry = match geometry_type {
            GeometryType::Point => self.point(dim).context("parse point")?.into(),
            GeometryType::MultiPoint => self.multi_point(dim).context("parse multipoint")?.into(),
            GeometryType::LineString => self.line_string(dim).context("parse linestring")?.into(),
            GeometryType::CircularString => self
                .circular_string(dim)
                .context("parse circularstring")?
                .into(),
            GeometryType::MultiLineString => self
                .multi_line_string(dim)
                .context("parse multilinestring")?
                .into(),
            GeometryType::Polygon => self.polygon(dim).context("parse polygon")?.into(),
            GeometryType::MultiPolygon => self
                .multi_polygon(dim)
                .context("parse multipolygon")?
                .into(),
        };
        Ok(geometry)
    }

    /// Read the geometry keyword.
    fn geometry_type(&mut self) -> WktResult<GeometryType> {
        let token = self.tokens.next();
        let geometry_type = match token.as_ref().and_then(Token::keyword) {
            Some(Keyword::Point) => GeometryType::Point,
            Some(Keyword::MultiPoint) => GeometryType::MultiPoint,
            Some(Keyword::LineString) => GeometryType::LineString,
            Some(Keyword::CircularString) => GeometryType::CircularString,
            Some(Keyword::MultiLineString) => GeometryType::MultiLineString,
            Some(Keyword::Polygon) => GeometryType::Polygon,
            Some(Keyword::MultiPolygon) => GeometryType::MultiPolygon,
            _ => {
                return Err(WktError::UnexpectedGeometryType {
                    found: token.map(|t| t.text().to_string()),
                    offset: self.offset_of(token.as_ref()),
                })
            }
        };
        Ok(geometry_type)
    }

    /// Read the dimensionality marker following the geometry keyword.
    ///
    /// Unless the result is [`CoordinateType::Empty`], the opening `(` of the geometry body has
    /// been consumed on return.
    fn coord_type(&mut self) -> WktResult<CoordinateType> {
        let token = self.tokens.next();
        let coord_type = match token.map(|t| (t.kind(), t.keyword())) {
            Some((TokenKind::Punct('('), _)) => return Ok(CoordinateType::XY),
            Some((_, Some(Keyword::Empty))) => return Ok(CoordinateType::Empty),
            Some((_, Some(Keyword::Z))) => CoordinateType::XYZ,
            Some((_, Some(Keyword::M))) => CoordinateType::XYM,
            Some((_, Some(Keyword::ZM))) => CoordinateType::XYZM,
            _ => {
                return Err(WktError::UnexpectedCoordinateType {
                    found: token.map(|t| t.text().to_string()),
                    offset: self.offset_of(token.as_ref()),
                })
            }
        };
        self.expect('(', OPEN).context("detect coordinate type")?;
        Ok(coord_type)
    }

    /// Read one coordinate tuple of exactly `dim.size()` signed numbers.
    fn coord(&mut self, dim: Dimension) -> WktResult<Point> {
        let mut values = [0.; 4];
        for value in values.iter_mut().take(dim.size()) {
            *value = self.number()?;
        }
        Ok(Point::from_values(dim, &values[..dim.size()]))
    }

    /// Read one number, applying a preceding `-` sign token if present.
    fn number(&mut self) -> WktResult<f64> {
        let mut token = self.next_token(NUMBER)?;
        let negative = token.is_punct('-');
        if negative {
            token = self.next_token(NUMBER)?;
        }

        let value: f64 = token
            .text()
            .parse()
            .map_err(|source| WktError::InvalidNumber {
                token: token.text().to_string(),
                offset: token.offset(),
                source,
            })?;
        if !value.is_finite() {
            return Err(WktError::NonFiniteNumber {
                token: token.text().to_string(),
                offset: token.offset(),
            });
        }
        Ok(if negative { -value } else { value })
    }

    fn point(&mut self, dim: Dimension) -> WktResult<Point> {
        let point = self.coord(dim)?;
        self.expect(')', CLOSE)?;
        Ok(point)
    }

    fn multi_point(&mut self, dim: Dimension) -> WktResult<MultiPoint> {
        // Members may be bare tuples or parenthesized ones.
        let points = self.delimited(|reader| {
            if reader.tokens.next_if(|t| t.is_punct('(')).is_some() {
                reader.point(dim)
            } else {
                reader.coord(dim)
            }
        })?;
        MultiPoint::try_new(points, dim)
    }

    fn line_string(&mut self, dim: Dimension) -> WktResult<LineString> {
        let points = self.delimited(|reader| reader.coord(dim))?;
        LineString::try_new(points, dim)
    }

    fn circular_string(&mut self, dim: Dimension) -> WktResult<CircularString> {
        let points = self.delimited(|reader| reader.coord(dim))?;
        CircularString::try_new(points, dim)
    }

    fn multi_line_string(&mut self, dim: Dimension) -> WktResult<MultiLineString> {
        let line_strings = self.delimited(|reader| {
            reader
                .nested(|reader| reader.line_string(dim))
                .context("parse linestring")
        })?;
        MultiLineString::try_new(line_strings, dim)
    }

    fn polygon(&mut self, dim: Dimension) -> WktResult<Polygon> {
        let rings = self.delimited(|reader| {
            reader
                .nested(|reader| reader.line_string(dim))
                .context("parse ring")
        })?;
        Polygon::try_new(rings, dim)
    }

    fn multi_polygon(&mut self, dim: Dimension) -> WktResult<MultiPolygon> {
        let polygons = self.delimited(|reader| {
            reader
                .nested(|reader| reader.polygon(dim))
                .context("parse polygon")
        })?;
        MultiPolygon::try_new(polygons, dim)
    }

    /// Parse elements separated by `,` up to and including the closing `)`.
    fn delimited<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> WktResult<T>,
    ) -> WktResult<Vec<T>> {
        let mut items = vec![];
        loop {
            items.push(element(self)?);

            let token = self.next_token(COMMA_OR_CLOSE)?;
            match token.kind() {
                TokenKind::Punct(',') => continue,
                TokenKind::Punct(')') => return Ok(items),
                _ => return Err(unexpected_token(token, COMMA_OR_CLOSE)),
            }
        }
    }

    /// Consume an opening `(` and parse the element it opens.
    fn nested<T>(&mut self, element: impl FnOnce(&mut Self) -> WktResult<T>) -> WktResult<T> {
        self.expect('(', OPEN)?;
        element(self)
    }

    fn expect(&mut self, punct: char, expected: &'static str) -> WktResult<()> {
        let token = self.next_token(expected)?;
        if token.is_punct(punct) {
            Ok(())
        } else {
            Err(unexpected_token(token, expected))
        }
    }

    fn next_token(&mut self, expected: &'static str) -> WktResult<Token<'a>> {
        self.tokens.next().ok_or(WktError::UnexpectedEof {
            expected,
            offset: self.len,
        })
    }

    fn offset_of(&self, token: Option<&Token<'_>>) -> usize {
        token.map_or(self.len, Token::offset)
    }
}

fn unexpected_token(token: Token<'_>, expected: &'static str) -> WktError {
    WktError::UnexpectedToken {
        found: token.text().to_string(),
        expected,
        offset: token.offset(),
    }
}
