//! A reader for OGC Well-Known Text (WKT) geometries.
//!
//! WKT literals are parsed into an immutable [`Geometry`](geometry::Geometry) value covering
//! points, line strings, circular strings, polygons and their multi- collections, in 2D, 3D
//! (Z or M) and 4D (ZM).
//!
//! ```
//! use wkt_reader::geometry::{Dimension, Geometry};
//!
//! let geom: Geometry = "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))".parse().unwrap();
//! let polygon = geom.as_polygon().unwrap();
//! assert_eq!(polygon.dimension(), Some(Dimension::XY));
//! assert_eq!(polygon.exterior().unwrap().num_points(), 5);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use error::{ErrorKind, WktError, WktResult};
pub use geometry::Geometry;
pub use io::wkt::{parse_wkt, read_wkt};

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
