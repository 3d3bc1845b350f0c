use std::fmt;
use std::ops::Range;

use colt_result::{Error, Result};

/// Validate `offset..offset + length` against a buffer of `available` bytes.
///
/// Overflowing ranges are rejected rather than wrapped.
#[inline]
pub fn checked_range(available: usize, offset: usize, length: usize) -> Result<Range<usize>> {
    match offset.checked_add(length) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(Error::range_out_of_bounds(offset, length, available)),
    }
}

/// Borrowed view over part of a block's value buffer.
///
/// A `Slice` is the triple (buffer, offset, length). It never copies; its
/// lifetime is tied to the buffer it was cut from.
#[derive(Clone, Copy)]
pub struct Slice<'a> {
    buffer: &'a [u8],
    offset: usize,
    length: usize,
}

impl<'a> Slice<'a> {
    /// View `length` bytes of `buffer` starting at `offset`.
    pub fn new(buffer: &'a [u8], offset: usize, length: usize) -> Result<Self> {
        checked_range(buffer.len(), offset, length)?;
        Ok(Self {
            buffer,
            offset,
            length,
        })
    }

    /// View the whole of `buffer`.
    #[inline]
    pub fn whole(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: 0,
            length: buffer.len(),
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The viewed bytes, still borrowing the source buffer.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buffer[self.offset..self.offset + self.length]
    }

    /// Narrow this view further; `offset` is relative to the current view.
    pub fn sub_slice(&self, offset: usize, length: usize) -> Result<Slice<'a>> {
        let range = checked_range(self.length, offset, length)?;
        Ok(Self {
            buffer: self.buffer,
            offset: self.offset + range.start,
            length,
        })
    }

    /// Strict UTF-8 view of the bytes.
    pub fn to_str(&self) -> Result<&'a str> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }

    /// Owned copy of the bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Slice<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Slice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Slice<'_> {}

impl PartialEq<[u8]> for Slice<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Slice<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl fmt::Debug for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("bytes", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
