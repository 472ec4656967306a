use serde::Serialize;

use crate::error::WktResult;
use crate::geometry::util::container_coord_type;
use crate::geometry::{CoordinateType, Dimension, LineString};

/// A polygon described by its rings.
///
/// The first ring is the exterior boundary and any further rings are holes. This is a
/// convention only: closure and winding order are not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    rings: Vec<LineString>,
    coord_type: CoordinateType,
}

impl Polygon {
    /// # Panics
    ///
    /// If any ring has a coordinate type other than `dim`.
    pub fn new(rings: Vec<LineString>, dim: Dimension) -> Self {
        Self::try_new(rings, dim).unwrap()
    }

    pub fn try_new(rings: Vec<LineString>, dim: Dimension) -> WktResult<Self> {
        let coord_type = container_coord_type(dim, rings.iter().map(LineString::coord_type))?;
        Ok(Self {
            rings,
            coord_type,
        })
    }

    /// `POLYGON EMPTY`
    pub fn empty() -> Self {
        Self {
            rings: vec![],
            coord_type: CoordinateType::Empty,
        }
    }

    /// All rings in source order, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The exterior ring, `None` for an empty polygon.
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The interior rings (holes).
    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    pub fn coord_type(&self) -> CoordinateType {
        self.coord_type
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.coord_type.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }
}
