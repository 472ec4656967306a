use serde::Serialize;

use crate::error::WktResult;
use crate::geometry::util::container_coord_type;
use crate::geometry::{CoordinateType, Dimension, LineString};

/// An ordered collection of line strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    coord_type: CoordinateType,
}

impl MultiLineString {
    /// # Panics
    ///
    /// If any line string has a coordinate type other than `dim`.
    pub fn new(line_strings: Vec<LineString>, dim: Dimension) -> Self {
        Self::try_new(line_strings, dim).unwrap()
    }

    pub fn try_new(line_strings: Vec<LineString>, dim: Dimension) -> WktResult<Self> {
        let coord_type =
            container_coord_type(dim, line_strings.iter().map(LineString::coord_type))?;
        Ok(Self {
            line_strings,
            coord_type,
        })
    }

    /// `MULTILINESTRING EMPTY`
    pub fn empty() -> Self {
        Self {
            line_strings: vec![],
            coord_type: CoordinateType::Empty,
        }
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn line_string(&self, i: usize) -> Option<&LineString> {
        self.line_strings.get(i)
    }

    pub fn coord_type(&self) -> CoordinateType {
        self.coord_type
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.coord_type.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    pub fn into_line_strings(self) -> Vec<LineString> {
        self.line_strings
    }
}
