//! Defines [`WktError`], representing all errors returned by this crate.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::geometry::CoordinateType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WktError {
    /// The geometry keyword is missing or not one of the supported kinds.
    #[error("unexpected geometry type {} at offset {offset}", display_found(.found))]
    UnexpectedGeometryType {
        /// Offending token text, `None` at end of input.
        found: Option<String>,
        /// Byte offset of the offending token.
        offset: usize,
    },

    /// The dimensionality marker is missing or not one of `Z`, `M`, `ZM`, `EMPTY` or `(`.
    #[error("unexpected coordinate type {} at offset {offset}", display_found(.found))]
    UnexpectedCoordinateType {
        /// Offending token text, `None` at end of input.
        found: Option<String>,
        /// Byte offset of the offending token.
        offset: usize,
    },

    /// A structural token is not what the grammar requires at this position.
    #[error("unexpected token `{found}` at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        offset: usize,
    },

    /// Input ended while more tokens were required.
    #[error("unexpected EOF at offset {offset}, expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        offset: usize,
    },

    /// A token in coordinate position is not a valid floating point literal.
    #[error("invalid number `{token}` at offset {offset}")]
    InvalidNumber {
        token: String,
        offset: usize,
        #[source]
        source: ParseFloatError,
    },

    /// A token in coordinate position parsed to an infinite or NaN value.
    #[error("number `{token}` at offset {offset} is not finite")]
    NonFiniteNumber { token: String, offset: usize },

    /// A geometry was assembled from parts of differing coordinate types.
    #[error("mixed dimensions: expected {expected}, found {found}")]
    MixedDimension {
        expected: CoordinateType,
        found: CoordinateType,
    },

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Another error, annotated with the routine that was running when it occurred.
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<WktError>,
    },
}

fn display_found(found: &Option<String>) -> String {
    match found {
        Some(token) => format!("`{token}`"),
        None => "EOF".to_string(),
    }
}

/// The root cause of a [`WktError`], independent of any context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedGeometryType,
    UnexpectedCoordinateType,
    UnexpectedToken,
    UnexpectedEof,
    InvalidNumber,
    MixedDimension,
    IncorrectGeometryType,
    Io,
}

impl WktError {
    /// The kind of the innermost error, looking through [`WktError::Context`] layers.
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            WktError::UnexpectedGeometryType { .. } => ErrorKind::UnexpectedGeometryType,
            WktError::UnexpectedCoordinateType { .. } => ErrorKind::UnexpectedCoordinateType,
            WktError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            WktError::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            WktError::InvalidNumber { .. } | WktError::NonFiniteNumber { .. } => {
                ErrorKind::InvalidNumber
            }
            WktError::MixedDimension { .. } => ErrorKind::MixedDimension,
            WktError::IncorrectGeometryType(_) => ErrorKind::IncorrectGeometryType,
            WktError::IOError(_) => ErrorKind::Io,
            WktError::Context { .. } => unreachable!("root is never a context layer"),
        }
    }

    /// The innermost error.
    pub fn root(&self) -> &WktError {
        let mut err = self;
        while let WktError::Context { source, .. } = err {
            err = source.as_ref();
        }
        err
    }

    /// Byte offset into the input where the innermost error was detected, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self.root() {
            WktError::UnexpectedGeometryType { offset, .. }
            | WktError::UnexpectedCoordinateType { offset, .. }
            | WktError::UnexpectedToken { offset, .. }
            | WktError::UnexpectedEof { offset, .. }
            | WktError::InvalidNumber { offset, .. }
            | WktError::NonFiniteNumber { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// Crate-specific result type.
pub type WktResult<T> = std::result::Result<T, WktError>;

/// Attach the name of the running routine to an error.
pub(crate) trait Context<T> {
    fn context(self, context: &'static str) -> WktResult<T>;
}

impl<T> Context<T> for WktResult<T> {
    fn context(self, context: &'static str) -> WktResult<T> {
        self.map_err(|err| WktError::Context {
            context,
            source: Box::new(err),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_looks_through_context() {
        let err: WktResult<()> = Err(WktError::UnexpectedEof {
            expected: "`)`",
            offset: 7,
        });
        let err = err
            .context("parse ring")
            .context("parse polygon")
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(err.offset(), Some(7));
        assert_eq!(
            err.to_string(),
            "parse polygon: parse ring: unexpected EOF at offset 7, expected `)`"
        );
    }

    #[test]
    fn eof_in_keyword_position() {
        let err = WktError::UnexpectedGeometryType {
            found: None,
            offset: 0,
        };
        assert_eq!(err.to_string(), "unexpected geometry type EOF at offset 0");

        let err = WktError::UnexpectedCoordinateType {
            found: Some("Q".to_string()),
            offset: 6,
        };
        assert_eq!(err.to_string(), "unexpected coordinate type `Q` at offset 6");
    }
}
