//! Reader for the OGC Well-Known Text geometry encoding.

pub mod reader;

pub use reader::{parse_wkt, read_wkt, WktReader};

