use serde::Serialize;

use crate::geometry::{CoordinateType, Dimension};

/// A single coordinate tuple.
///
/// Values that the coordinate type does not carry (Z without a Z dimension, M without an M
/// dimension, everything for an empty point) are stored as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
    m: f64,
    coord_type: CoordinateType,
}

impl Point {
    /// Construct a 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: 0.,
            m: 0.,
            coord_type: CoordinateType::XY,
        }
    }

    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            m: 0.,
            coord_type: CoordinateType::XYZ,
        }
    }

    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: 0.,
            m,
            coord_type: CoordinateType::XYM,
        }
    }

    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z,
            m,
            coord_type: CoordinateType::XYZM,
        }
    }

    /// `POINT EMPTY`
    pub fn empty() -> Self {
        Self {
            x: 0.,
            y: 0.,
            z: 0.,
            m: 0.,
            coord_type: CoordinateType::Empty,
        }
    }

    /// Build a point from exactly `dim.size()` values, in X, Y, Z, M order.
    ///
    /// # Panics
    ///
    /// If `values` does not have `dim.size()` entries.
    pub(crate) fn from_values(dim: Dimension, values: &[f64]) -> Self {
        assert_eq!(values.len(), dim.size(), "coordinate arity");
        match dim {
            Dimension::XY => Self::new(values[0], values[1]),
            Dimension::XYZ => Self::new_z(values[0], values[1], values[2]),
            Dimension::XYM => Self::new_m(values[0], values[1], values[2]),
            Dimension::XYZM => Self::new_zm(values[0], values[1], values[2], values[3]),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The Z value, `0.0` when the point has no Z dimension.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// The M value, `0.0` when the point has no M dimension.
    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn coord_type(&self) -> CoordinateType {
        self.coord_type
    }

    /// `None` for an empty point.
    pub fn dimension(&self) -> Option<Dimension> {
        self.coord_type.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.coord_type.is_empty()
    }

    /// The values actually carried by this point, in X, Y, Z, M order.
    ///
    /// Yields nothing for an empty point.
    pub fn coords(&self) -> impl Iterator<Item = f64> + '_ {
        let dim = self.dimension();
        let z = dim.filter(Dimension::has_z).map(|_| self.z);
        let m = dim.filter(Dimension::has_m).map(|_| self.m);
        let xy = dim.map(|_| [self.x, self.y]);
        xy.into_iter().flatten().chain(z).chain(m)
    }
}
