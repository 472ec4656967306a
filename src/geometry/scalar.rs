use std::str::FromStr;

use serde::Serialize;

use crate::error::WktError;
use crate::geometry::{
    CircularString, CoordinateType, Dimension, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// A parsed WKT geometry of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    CircularString(CircularString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// The value of `<KIND> EMPTY` for the given kind.
    pub fn empty(geometry_type: GeometryType) -> Self {
        match geometry_type {
            GeometryType::Point => Geometry::Point(Point::empty()),
            GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint::empty()),
            GeometryType::LineString => Geometry::LineString(LineString::empty()),
            GeometryType::CircularString => Geometry::CircularString(CircularString::empty()),
            GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineString::empty()),
            GeometryType::Polygon => Geometry::Polygon(Polygon::empty()),
            GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::empty()),
        }
    }

    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::CircularString(_) => GeometryType::CircularString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    pub fn coord_type(&self) -> CoordinateType {
        match self {
            Geometry::Point(g) => g.coord_type(),
            Geometry::MultiPoint(g) => g.coord_type(),
            Geometry::LineString(g) => g.coord_type(),
            Geometry::CircularString(g) => g.coord_type(),
            Geometry::MultiLineString(g) => g.coord_type(),
            Geometry::Polygon(g) => g.coord_type(),
            Geometry::MultiPolygon(g) => g.coord_type(),
        }
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.coord_type().dimension()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::CircularString(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
        }
    }

    /// Total number of points in this geometry, counting every nested ring and line.
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Point(g) => usize::from(!g.is_empty()),
            Geometry::MultiPoint(g) => g.num_points(),
            Geometry::LineString(g) => g.num_points(),
            Geometry::CircularString(g) => g.num_points(),
            Geometry::MultiLineString(g) => g.line_strings().iter().map(|l| l.num_points()).sum(),
            Geometry::Polygon(g) => g.rings().iter().map(|r| r.num_points()).sum(),
            Geometry::MultiPolygon(g) => g
                .polygons()
                .iter()
                .flat_map(|p| p.rings())
                .map(|r| r.num_points())
                .sum(),
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Geometry::MultiPoint(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_circular_string(&self) -> Option<&CircularString> {
        match self {
            Geometry::CircularString(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            Geometry::MultiLineString(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_point(self) -> Option<Point> {
        match self {
            Geometry::Point(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_multi_point(self) -> Option<MultiPoint> {
        match self {
            Geometry::MultiPoint(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_line_string(self) -> Option<LineString> {
        match self {
            Geometry::LineString(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_circular_string(self) -> Option<CircularString> {
        match self {
            Geometry::CircularString(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_multi_line_string(self) -> Option<MultiLineString> {
        match self {
            Geometry::MultiLineString(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            Geometry::Polygon(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn into_multi_polygon(self) -> Option<MultiPolygon> {
        match self {
            Geometry::MultiPolygon(geom) => Some(geom),
            _ => None,
        }
    }
}

impl FromStr for Geometry {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::io::wkt::parse_wkt(s)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<CircularString> for Geometry {
    fn from(value: CircularString) -> Self {
        Geometry::CircularString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}
