use std::fmt::Display;

use serde::Serialize;

/// The dimension of a non-empty geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Returns the number of values in one coordinate tuple.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The coordinate layout declared by a WKT literal.
///
/// This is a [`Dimension`] plus the `EMPTY` state. A geometry's coordinate type is fixed once,
/// when the dimensionality marker is read, and every point nested inside it shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoordinateType {
    XY,
    XYZ,
    XYM,
    XYZM,
    /// `<KIND> EMPTY`
    Empty,
}

impl CoordinateType {
    /// The dimension of the coordinates, or `None` for [`CoordinateType::Empty`].
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            CoordinateType::XY => Some(Dimension::XY),
            CoordinateType::XYZ => Some(Dimension::XYZ),
            CoordinateType::XYM => Some(Dimension::XYM),
            CoordinateType::XYZM => Some(Dimension::XYZM),
            CoordinateType::Empty => None,
        }
    }

    /// Number of values in one coordinate tuple. Zero when empty.
    pub fn size(&self) -> usize {
        self.dimension().map_or(0, |dim| dim.size())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CoordinateType::Empty)
    }
}

impl From<Dimension> for CoordinateType {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::XY => CoordinateType::XY,
            Dimension::XYZ => CoordinateType::XYZ,
            Dimension::XYM => CoordinateType::XYM,
            Dimension::XYZM => CoordinateType::XYZM,
        }
    }
}

impl Display for CoordinateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dimension() {
            Some(dim) => dim.fmt(f),
            None => write!(f, "EMPTY"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::iter::zip;

    use super::*;

    #[test]
    fn sizes() {
        let dims = [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ];
        let sizes = [2, 3, 3, 4];

        for (dim, size) in zip(dims, sizes) {
            assert_eq!(dim.size(), size);
            let coord_type: CoordinateType = dim.into();
            assert_eq!(coord_type.size(), size);
            assert_eq!(coord_type.dimension(), Some(dim));
        }

        assert_eq!(CoordinateType::Empty.size(), 0);
        assert_eq!(CoordinateType::Empty.dimension(), None);
    }

    #[test]
    fn z_and_m_flags() {
        assert!(!Dimension::XY.has_z() && !Dimension::XY.has_m());
        assert!(Dimension::XYZ.has_z() && !Dimension::XYZ.has_m());
        assert!(!Dimension::XYM.has_z() && Dimension::XYM.has_m());
        assert!(Dimension::XYZM.has_z() && Dimension::XYZM.has_m());
    }

    #[test]
    fn display() {
        assert_eq!(CoordinateType::XYM.to_string(), "XYM");
        assert_eq!(CoordinateType::Empty.to_string(), "EMPTY");
    }
}
