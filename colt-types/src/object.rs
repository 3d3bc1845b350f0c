//! Materialized values for display and client transfer.

use std::borrow::Cow;
use std::fmt;

use colt_result::Result;

/// How stored bytes become text when a value is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Fail with `InvalidEncoding` on malformed UTF-8.
    #[default]
    Strict,
    /// Replace malformed sequences with U+FFFD.
    Lossy,
}

impl Utf8Policy {
    /// Decode `bytes` under this policy. Valid input is borrowed, never copied.
    pub fn decode<'a>(self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        match self {
            Utf8Policy::Strict => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
            Utf8Policy::Lossy => Ok(String::from_utf8_lossy(bytes)),
        }
    }
}

/// Options for [`Type::object_value_with`](crate::Type::object_value_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterializeOptions {
    pub utf8: Utf8Policy,
}

impl MaterializeOptions {
    pub fn lossy() -> Self {
        Self {
            utf8: Utf8Policy::Lossy,
        }
    }
}

/// A non-null value in its engine-native form, borrowing from the block
/// whenever possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectValue<'a> {
    Str(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
}

impl ObjectValue<'_> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ObjectValue::Str(s) => Some(s.as_ref()),
            ObjectValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ObjectValue::Str(s) => s.as_bytes(),
            ObjectValue::Bytes(b) => b.as_ref(),
        }
    }

    /// Detach from the block.
    pub fn into_owned(self) -> ObjectValue<'static> {
        match self {
            ObjectValue::Str(s) => ObjectValue::Str(Cow::Owned(s.into_owned())),
            ObjectValue::Bytes(b) => ObjectValue::Bytes(Cow::Owned(b.into_owned())),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    use fmt::Write as _;
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

impl fmt::Display for ObjectValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectValue::Str(s) => f.write_str(s),
            ObjectValue::Bytes(b) => f.write_str(&hex(b)),
        }
    }
}
