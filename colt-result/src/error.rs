use std::{fmt, str::Utf8Error};
use thiserror::Error;

use crate::code::ErrorCode;

/// Boxed underlying cause carried by catalog-level errors.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all COLT operations.
///
/// Each variant corresponds to one contract a caller can violate. None of them
/// is transient: repeating the same call with the same arguments fails the
/// same way, so callers should correct the input rather than retry.
///
/// # Thread Safety
///
/// `Error` is `Send + Sync` so it can cross the worker threads of a query
/// engine unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A type was requested with a parameter it cannot accept.
    ///
    /// Raised when:
    /// - A variable-width type is created with a negative declared length
    /// - A type signature carries a parameter list that does not parse
    /// - A registry lookup names a base type with the wrong parameter arity
    #[error("invalid type parameter: {0}")]
    InvalidTypeParameter(String),

    /// A byte range or position falls outside the buffer it addresses.
    ///
    /// Always an upstream programming error; the message names the offending
    /// range and the bound it exceeded.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Stored bytes were materialized as text but are not valid UTF-8.
    ///
    /// # Recovery
    ///
    /// Treat the value as opaque bytes, or materialize with the lossy policy.
    #[error("invalid UTF-8 encoding: {0}")]
    InvalidEncoding(#[from] Utf8Error),

    /// A named catalog entity already exists.
    ///
    /// Carries the entity kind (e.g. `"Schema"`, `"Type"`), the conflicting
    /// name, and an optional underlying cause that is surfaced unchanged
    /// through [`std::error::Error::source`].
    #[error("{kind} {name} already exists.")]
    AlreadyExists {
        kind: &'static str,
        name: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// Arrow library error while building or reading columnar arrays.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Internal error indicating a bug or unexpected state.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an [`Error::OutOfBounds`] for a byte range that overruns its buffer.
    #[inline]
    pub fn range_out_of_bounds(offset: usize, length: usize, available: usize) -> Self {
        Error::OutOfBounds(format!(
            "byte range offset {offset} length {length} exceeds buffer of {available} bytes"
        ))
    }

    /// Create an [`Error::OutOfBounds`] for a position past the end of a block.
    #[inline]
    pub fn position_out_of_bounds(position: usize, position_count: usize) -> Self {
        Error::OutOfBounds(format!(
            "position {position} is outside block with {position_count} positions"
        ))
    }

    /// Create an [`Error::InvalidTypeParameter`] from any displayable message.
    #[inline]
    pub fn invalid_type_parameter<M: fmt::Display>(msg: M) -> Self {
        Error::InvalidTypeParameter(msg.to_string())
    }

    /// The schema-level "already exists" condition.
    ///
    /// ```
    /// use colt_result::{Error, ErrorCode};
    ///
    /// let err = Error::schema_already_exists("sales", None);
    /// assert_eq!(err.to_string(), "Schema sales already exists.");
    /// assert_eq!(err.code(), ErrorCode::AlreadyExists);
    /// ```
    #[inline]
    pub fn schema_already_exists(
        schema_name: impl Into<String>,
        cause: Option<BoxedCause>,
    ) -> Self {
        Error::AlreadyExists {
            kind: "Schema",
            name: schema_name.into(),
            source: cause,
        }
    }

    /// A type signature that is already registered.
    #[inline]
    pub fn type_already_exists(signature: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind: "Type",
            name: signature.into(),
            source: None,
        }
    }

    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidTypeParameter(_) => ErrorCode::InvalidArgument,
            Error::OutOfBounds(_) => ErrorCode::OutOfBounds,
            Error::InvalidEncoding(_) => ErrorCode::InvalidEncoding,
            Error::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            Error::Arrow(_) | Error::Internal(_) => ErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn already_exists_carries_name_code_and_cause() {
        let cause = io::Error::other("duplicate key in catalog table");
        let err = Error::schema_already_exists("analytics", Some(Box::new(cause)));

        assert_eq!(err.to_string(), "Schema analytics already exists.");
        assert_eq!(err.code(), ErrorCode::AlreadyExists);
        assert_eq!(err.code().as_i32(), 4);
        let source = err.source().expect("cause is surfaced");
        assert_eq!(source.to_string(), "duplicate key in catalog table");

        match err {
            Error::AlreadyExists { kind, name, .. } => {
                assert_eq!(kind, "Schema");
                assert_eq!(name, "analytics");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn already_exists_without_cause_has_no_source() {
        let err = Error::type_already_exists("varchar(3)");
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Type varchar(3) already exists.");
    }

    #[test]
    fn utf8_errors_convert_into_invalid_encoding() {
        let bytes = vec![0x61, 0xFF];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::InvalidEncoding(_)));
        assert_eq!(err.code(), ErrorCode::InvalidEncoding);
    }

    #[test]
    fn out_of_bounds_messages_name_the_range() {
        let err = Error::range_out_of_bounds(3, 5, 6);
        assert_eq!(err.code(), ErrorCode::OutOfBounds);
        assert!(err.to_string().contains("offset 3 length 5"));
        assert!(err.to_string().contains("6 bytes"));

        let err = Error::position_out_of_bounds(9, 4);
        assert!(err.to_string().contains("position 9"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
