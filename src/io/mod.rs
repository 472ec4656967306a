//! Readers for textual geometry encodings, plus interoperability with the `geo` crate.

pub mod geo;
pub mod wkt;
