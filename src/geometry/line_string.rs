use serde::Serialize;

use crate::error::WktResult;
use crate::geometry::util::container_coord_type;
use crate::geometry::{CoordinateType, Dimension, Point};

/// Defines an ordered sequence of [`Point`]s that shares one coordinate type.
macro_rules! impl_point_sequence {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct $name {
            points: Vec<Point>,
            coord_type: CoordinateType,
        }

        impl $name {
            /// Construct from points that all have dimension `dim`.
            ///
            /// # Panics
            ///
            /// If any point has a different coordinate type.
            pub fn new(points: Vec<Point>, dim: Dimension) -> Self {
                Self::try_new(points, dim).unwrap()
            }

            /// Construct from points, checking that they all have dimension `dim`.
            ///
            /// Without points the result equals [`Self::empty`].
            pub fn try_new(points: Vec<Point>, dim: Dimension) -> WktResult<Self> {
                let coord_type = container_coord_type(dim, points.iter().map(Point::coord_type))?;
                Ok(Self {
                    points,
                    coord_type,
                })
            }

            /// The value of `<KIND> EMPTY`.
            pub fn empty() -> Self {
                Self {
                    points: vec![],
                    coord_type: CoordinateType::Empty,
                }
            }

            pub fn points(&self) -> &[Point] {
                &self.points
            }

            pub fn num_points(&self) -> usize {
                self.points.len()
            }

            /// Access to a specified point, `None` if out of bounds.
            pub fn point(&self, i: usize) -> Option<&Point> {
                self.points.get(i)
            }

            pub fn coord_type(&self) -> CoordinateType {
                self.coord_type
            }

            pub fn dimension(&self) -> Option<Dimension> {
                self.coord_type.dimension()
            }

            pub fn is_empty(&self) -> bool {
                self.points.is_empty()
            }

            pub fn into_points(self) -> Vec<Point> {
                self.points
            }
        }
    };
}

impl_point_sequence!(
    /// An ordered sequence of points joined by straight segments.
    ///
    /// Order is significant and duplicates are kept: a closed ring repeats its first point as
    /// its last.
    LineString
);

impl_point_sequence!(
    /// An ordered sequence of points joined by circular arcs.
    ///
    /// Structurally identical to [`LineString`]. The arc semantics are not interpreted.
    CircularString
);

impl_point_sequence!(
    /// An ordered collection of points.
    MultiPoint
);

impl From<CircularString> for LineString {
    fn from(value: CircularString) -> Self {
        Self {
            points: value.points,
            coord_type: value.coord_type,
        }
    }
}
