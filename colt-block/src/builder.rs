use arrow::array::{Array, ArrayBuilder, BinaryArray, BinaryBuilder};
use colt_result::{Error, Result};

use crate::slice::checked_range;

/// Write side of a variable-width column chunk.
///
/// Entries are built in two steps: any number of [`write_bytes`] calls fill the
/// open entry, and [`close_entry`] seals it as the next position. A null is a
/// single [`append_null`] call and may not interrupt an open entry.
///
/// Builders are single-writer; every method takes `&mut self`.
///
/// [`write_bytes`]: BlockBuilder::write_bytes
/// [`close_entry`]: BlockBuilder::close_entry
/// [`append_null`]: BlockBuilder::append_null
pub trait BlockBuilder {
    /// Append a closed null entry.
    fn append_null(&mut self) -> Result<()>;

    /// Copy `bytes[offset..offset + length]` into the open entry.
    ///
    /// On an out-of-range request nothing is written.
    fn write_bytes(&mut self, bytes: &[u8], offset: usize, length: usize) -> Result<()>;

    /// Seal the open entry. With nothing written this records an empty,
    /// non-null value.
    fn close_entry(&mut self) -> Result<()>;

    /// Number of closed entries.
    fn position_count(&self) -> usize;
}

/// Builder producing Arrow `BinaryArray` blocks.
///
/// Bytes for the open entry are staged locally and handed to the Arrow
/// builder when the entry closes, so partially written entries never reach
/// the offset table.
#[derive(Debug, Default)]
pub struct VariableWidthBlockBuilder {
    inner: BinaryBuilder,
    open_entry: Vec<u8>,
    entry_open: bool,
}

impl VariableWidthBlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `positions` entries holding `data_bytes` bytes in total.
    pub fn with_capacity(positions: usize, data_bytes: usize) -> Self {
        Self {
            inner: BinaryBuilder::with_capacity(positions, data_bytes),
            open_entry: Vec::new(),
            entry_open: false,
        }
    }

    /// Bytes written to the open entry so far.
    #[inline]
    pub fn open_entry_len(&self) -> usize {
        self.open_entry.len()
    }

    /// Seal the builder into a block.
    ///
    /// Fails if an entry is still open; the builder is left reusable and empty
    /// on success.
    pub fn finish(&mut self) -> Result<BinaryArray> {
        if self.entry_open {
            return Err(Error::Internal(format!(
                "cannot finish block with an open entry of {} bytes",
                self.open_entry.len()
            )));
        }
        let array = self.inner.finish();
        tracing::trace!(positions = array.len(), "variable-width block finished");
        Ok(array)
    }
}

impl BlockBuilder for VariableWidthBlockBuilder {
    fn append_null(&mut self) -> Result<()> {
        if self.entry_open {
            return Err(Error::Internal("cannot append null while an entry is open".into()));
        }
        self.inner.append_null();
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8], offset: usize, length: usize) -> Result<()> {
        let range = checked_range(bytes.len(), offset, length)?;
        self.open_entry.extend_from_slice(&bytes[range]);
        self.entry_open = true;
        Ok(())
    }

    fn close_entry(&mut self) -> Result<()> {
        self.inner.append_value(&self.open_entry);
        self.open_entry.clear();
        self.entry_open = false;
        Ok(())
    }

    #[inline]
    fn position_count(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    #[test]
    fn entries_accumulate_until_closed() {
        let mut b = VariableWidthBlockBuilder::new();
        b.write_bytes(b"col", 0, 3).unwrap();
        b.write_bytes(b"xxumnxx", 2, 3).unwrap();
        assert_eq!(b.open_entry_len(), 6);
        assert_eq!(BlockBuilder::position_count(&b), 0);
        b.close_entry().unwrap();
        b.append_null().unwrap();
        b.close_entry().unwrap();

        let array = b.finish().unwrap();
        let block: &dyn Block = &array;
        assert_eq!(block.position_count(), 3);
        assert_eq!(block.value_bytes(0).unwrap(), b"column");
        assert!(block.is_null(1).unwrap());
        assert!(!block.is_null(2).unwrap());
        assert_eq!(block.get_length(2).unwrap(), 0);
    }

    #[test]
    fn out_of_range_write_leaves_builder_untouched() {
        let mut b = VariableWidthBlockBuilder::new();
        b.write_bytes(b"ab", 0, 2).unwrap();
        assert!(matches!(b.write_bytes(b"abc", 2, 2), Err(Error::OutOfBounds(_))));
        assert_eq!(b.open_entry_len(), 2);
        b.close_entry().unwrap();
        let array = b.finish().unwrap();
        assert_eq!(array.value(0), b"ab");
    }

    #[test]
    fn null_cannot_interrupt_an_open_entry() {
        let mut b = VariableWidthBlockBuilder::new();
        b.write_bytes(b"a", 0, 1).unwrap();
        assert!(b.append_null().is_err());
        assert!(b.finish().is_err());
        b.close_entry().unwrap();
        assert_eq!(b.finish().unwrap().len(), 1);
    }

    #[test]
    fn zero_length_write_still_opens_an_entry() {
        let mut b = VariableWidthBlockBuilder::with_capacity(1, 0);
        b.write_bytes(b"abc", 3, 0).unwrap();
        assert!(b.finish().is_err());
        b.close_entry().unwrap();
        let array = b.finish().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array.value(0), b"");
    }
}
