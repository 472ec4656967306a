use crate::error::{WktError, WktResult};
use crate::geometry::{
    Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Convert a non-empty point to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(point: &Point) -> geo::Coord {
    geo::Coord {
        x: point.x(),
        y: point.y(),
    }
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept. `geo` has no empty point, so an empty point is
/// an error.
pub fn point_to_geo(point: &Point) -> WktResult<geo::Point> {
    if point.is_empty() {
        return Err(WktError::IncorrectGeometryType(
            "empty point has no geo representation".to_string(),
        ));
    }
    Ok(geo::Point(coord_to_geo(point)))
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(line_string.points().iter().map(coord_to_geo).collect())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. An empty polygon becomes a polygon with an empty
/// exterior. Note that [`geo::Polygon::new`] closes any open ring.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(
        multi_point
            .points()
            .iter()
            .map(|point| geo::Point(coord_to_geo(point)))
            .collect(),
    )
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert a Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept. Circular strings and empty points have no
/// counterpart in `geo` and fail with [`WktError::IncorrectGeometryType`].
pub fn geometry_to_geo(geometry: &Geometry) -> WktResult<geo::Geometry> {
    let geom = match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)?),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::CircularString(_) => {
            return Err(WktError::IncorrectGeometryType(
                "CIRCULARSTRING has no geo representation".to_string(),
            ))
        }
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)),
    };
    Ok(geom)
}

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = WktError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        geometry_to_geo(value)
    }
}

impl TryFrom<&Point> for geo::Point {
    type Error = WktError;

    fn try_from(value: &Point) -> Result<Self, Self::Error> {
        point_to_geo(value)
    }
}

impl From<&LineString> for geo::LineString {
    fn from(value: &LineString) -> Self {
        line_string_to_geo(value)
    }
}

impl From<&Polygon> for geo::Polygon {
    fn from(value: &Polygon) -> Self {
        polygon_to_geo(value)
    }
}

impl From<&MultiPoint> for geo::MultiPoint {
    fn from(value: &MultiPoint) -> Self {
        multi_point_to_geo(value)
    }
}

impl From<&MultiLineString> for geo::MultiLineString {
    fn from(value: &MultiLineString) -> Self {
        multi_line_string_to_geo(value)
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon {
    fn from(value: &MultiPolygon) -> Self {
        multi_polygon_to_geo(value)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo::{line_string, point, polygon};

    use super::*;
    use crate::error::ErrorKind;
    use crate::io::wkt::parse_wkt;
    use crate::test::{linestring, multipolygon, polygon as polygon_fixtures};

    #[test]
    fn point_drops_z_and_m() {
        let geom = parse_wkt("POINT ZM (30.2 20.7 34.777 63.23)").unwrap();
        let geo_point = match geo::Geometry::try_from(&geom).unwrap() {
            geo::Geometry::Point(point) => point,
            other => panic!("unexpected geometry {other:?}"),
        };
        assert_relative_eq!(geo_point, point!(x: 30.2, y: 20.7));
    }

    #[test]
    fn line_string() {
        let geo_line: geo::LineString = (&linestring::ls0()).into();
        assert_eq!(
            geo_line,
            line_string![(x: 30., y: 10.), (x: 10., y: 30.), (x: 40., y: 40.)]
        );
    }

    #[test]
    fn polygon_with_hole() {
        let geo_polygon = polygon_to_geo(&polygon_fixtures::p1());
        let expected = polygon!(
            exterior: [
                (x: 35., y: 10.),
                (x: 45., y: 45.),
                (x: 15., y: 40.),
                (x: 10., y: 20.),
                (x: 35., y: 10.)
            ],
            interiors: [
                [
                    (x: 20., y: 30.),
                    (x: 35., y: 35.),
                    (x: 30., y: 20.),
                    (x: 20., y: 30.)
                ]
            ]
        );
        assert_relative_eq!(geo_polygon, expected);
    }

    #[test]
    fn multi_polygon() {
        let geo_multi = multi_polygon_to_geo(&multipolygon::mp0());
        assert_eq!(geo_multi.0.len(), 2);
        assert_eq!(geo_multi.0[1].interiors().len(), 1);
    }

    #[test]
    fn unrepresentable_geometries() {
        let err = geometry_to_geo(&Geometry::Point(Point::empty())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncorrectGeometryType);

        let circular = parse_wkt(linestring::CS0).unwrap();
        let err = geo::Geometry::try_from(&circular).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncorrectGeometryType);
    }

    #[test]
    fn empty_polygon() {
        let geom = parse_wkt("POLYGON EMPTY").unwrap();
        let geo_geom = geometry_to_geo(&geom).unwrap();
        match geo_geom {
            geo::Geometry::Polygon(polygon) => {
                assert!(polygon.exterior().0.is_empty());
                assert!(polygon.interiors().is_empty());
            }
            other => panic!("unexpected geometry {other:?}"),
        }
    }
}
