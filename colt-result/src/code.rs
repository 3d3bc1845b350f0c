use std::fmt;

/// Stable, machine-readable codes for catalog-level error conditions.
///
/// Codes are pinned so callers across process and language boundaries can
/// match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidArgument = 1,
    OutOfBounds = 2,
    InvalidEncoding = 3,
    AlreadyExists = 4,
    Internal = 5,
}

impl ErrorCode {
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::OutOfBounds => "OUT_OF_BOUNDS",
            ErrorCode::InvalidEncoding => "INVALID_ENCODING",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
