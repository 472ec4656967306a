use std::fmt::Display;

use serde::Serialize;

/// The kind discriminant of a [`Geometry`](crate::geometry::Geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    CircularString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryType {
    /// The WKT keyword introducing this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::CircularString => "CIRCULARSTRING",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
