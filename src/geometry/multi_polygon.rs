use serde::Serialize;

use crate::error::WktResult;
use crate::geometry::util::container_coord_type;
use crate::geometry::{CoordinateType, Dimension, Polygon};

/// An ordered collection of polygons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    coord_type: CoordinateType,
}

impl MultiPolygon {
    /// # Panics
    ///
    /// If any polygon has a coordinate type other than `dim`.
    pub fn new(polygons: Vec<Polygon>, dim: Dimension) -> Self {
        Self::try_new(polygons, dim).unwrap()
    }

    pub fn try_new(polygons: Vec<Polygon>, dim: Dimension) -> WktResult<Self> {
        let coord_type = container_coord_type(dim, polygons.iter().map(Polygon::coord_type))?;
        Ok(Self {
            polygons,
            coord_type,
        })
    }

    /// `MULTIPOLYGON EMPTY`
    pub fn empty() -> Self {
        Self {
            polygons: vec![],
            coord_type: CoordinateType::Empty,
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.polygons.get(i)
    }

    pub fn coord_type(&self) -> CoordinateType {
        self.coord_type
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.coord_type.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{LineString, Point};

    #[test]
    fn nested_dimensions_must_match() {
        let ring = LineString::new(
            vec![
                Point::new_zm(0., 0., 1., 2.),
                Point::new_zm(1., 0., 1., 2.),
                Point::new_zm(0., 0., 1., 2.),
            ],
            Dimension::XYZM,
        );
        let polygon = Polygon::new(vec![ring], Dimension::XYZM);

        let multi = MultiPolygon::new(vec![polygon.clone()], Dimension::XYZM);
        assert_eq!(multi.polygon(0), Some(&polygon));
        assert_eq!(multi.coord_type(), CoordinateType::XYZM);

        assert!(MultiPolygon::try_new(vec![polygon], Dimension::XYM).is_err());
        assert!(MultiPolygon::try_new(vec![Polygon::empty()], Dimension::XY).is_err());
        assert_eq!(
            MultiPolygon::try_new(vec![], Dimension::XY).unwrap(),
            MultiPolygon::empty()
        );
    }
}
