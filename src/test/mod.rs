//! WKT literals and the geometries they describe, shared by tests across the crate.

pub(crate) mod multipolygon;
pub(crate) mod polygon;
