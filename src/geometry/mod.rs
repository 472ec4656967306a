//! The geometry model produced by the WKT reader.
//!
//! Every value is built once by a parse and is immutable afterwards. All points nested in one
//! geometry share its [`CoordinateType`].

pub use dimension::{CoordinateType, Dimension};
pub use geometry_type::GeometryType;
pub use line_string::{CircularString, LineString, MultiPoint};
pub use multi_line_string::MultiLineString;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use scalar::Geometry;

mod dimension;
mod geometry_type;
mod line_string;
mod multi_line_string;
mod multi_polygon;
mod point;
mod polygon;
mod scalar;
mod util;
