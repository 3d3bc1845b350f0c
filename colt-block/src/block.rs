use std::cmp::Ordering;

use arrow::array::{
    Array, BinaryArray, GenericByteArray, LargeBinaryArray, LargeStringArray, StringArray,
};
use arrow::datatypes::{ByteArrayType, DataType};
use colt_result::{Error, Result};

use crate::builder::BlockBuilder;
use crate::hash::hash_bytes;
use crate::slice::Slice;

/// Read side of a variable-width column chunk.
///
/// Implementors supply position bookkeeping and the raw bytes of a position;
/// the sub-range operations are provided on top of those and bounds-check
/// every range against the addressed value. A null position reads as an empty
/// byte string whatever its slot holds, so all nulls are equal and hash alike;
/// callers that need to tell null from empty test [`Block::is_null`].
///
/// Blocks are read concurrently and must not change while borrowed.
pub trait Block: Send + Sync {
    /// Number of positions (null or not) in the block.
    fn position_count(&self) -> usize;

    fn is_null(&self, position: usize) -> Result<bool>;

    /// All bytes stored at `position`; empty for a null.
    fn value_bytes(&self, position: usize) -> Result<&[u8]>;

    /// Byte length of the value at `position`.
    fn get_length(&self, position: usize) -> Result<usize> {
        Ok(self.value_bytes(position)?.len())
    }

    /// Zero-copy view of `length` bytes of the value at `position`, starting
    /// `offset` bytes into it.
    fn get_slice(&self, position: usize, offset: usize, length: usize) -> Result<Slice<'_>> {
        Slice::new(self.value_bytes(position)?, offset, length)
    }

    /// Byte-wise equality of two equally long sub-ranges.
    #[allow(clippy::too_many_arguments)]
    fn equals(
        &self,
        position: usize,
        offset: usize,
        other: &dyn Block,
        other_position: usize,
        other_offset: usize,
        length: usize,
    ) -> Result<bool> {
        let left = self.get_slice(position, offset, length)?;
        let right = other.get_slice(other_position, other_offset, length)?;
        Ok(left.as_bytes() == right.as_bytes())
    }

    /// Content hash of a sub-range; see [`hash_bytes`].
    fn hash(&self, position: usize, offset: usize, length: usize) -> Result<u64> {
        Ok(hash_bytes(self.get_slice(position, offset, length)?.as_bytes()))
    }

    /// Lexicographic, unsigned byte-wise comparison of two sub-ranges. A
    /// range that is a strict prefix of the other orders first.
    #[allow(clippy::too_many_arguments)]
    fn compare_to(
        &self,
        position: usize,
        offset: usize,
        length: usize,
        other: &dyn Block,
        other_position: usize,
        other_offset: usize,
        other_length: usize,
    ) -> Result<Ordering> {
        let left = self.get_slice(position, offset, length)?;
        let right = other.get_slice(other_position, other_offset, other_length)?;
        Ok(left.as_bytes().cmp(right.as_bytes()))
    }

    /// Copy a sub-range into the open entry of `builder`. The entry is left
    /// open; the caller closes it.
    fn write_bytes_to(
        &self,
        position: usize,
        offset: usize,
        length: usize,
        builder: &mut dyn BlockBuilder,
    ) -> Result<()> {
        let slice = self.get_slice(position, offset, length)?;
        builder.write_bytes(slice.as_bytes(), 0, slice.len())
    }
}

#[inline]
fn check_position(position: usize, position_count: usize) -> Result<()> {
    if position < position_count {
        Ok(())
    } else {
        Err(Error::position_out_of_bounds(position, position_count))
    }
}

/// Every Arrow byte array is a block: binary and UTF-8, 32- and 64-bit offsets.
impl<T> Block for GenericByteArray<T>
where
    T: ByteArrayType,
{
    #[inline]
    fn position_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_null(&self, position: usize) -> Result<bool> {
        check_position(position, self.len())?;
        Ok(Array::is_null(self, position))
    }

    #[inline]
    fn value_bytes(&self, position: usize) -> Result<&[u8]> {
        check_position(position, self.len())?;
        // Arrow leaves null slots' offsets unconstrained.
        if Array::is_null(self, position) {
            return Ok(&[]);
        }
        Ok(AsRef::<[u8]>::as_ref(self.value(position)))
    }
}

/// View a type-erased Arrow array as a [`Block`].
///
/// Only byte arrays qualify; any other Arrow type is rejected.
pub fn block_from_array(array: &dyn Array) -> Result<&dyn Block> {
    fn downcast<A: Block + 'static>(array: &dyn Array) -> Result<&dyn Block> {
        array
            .as_any()
            .downcast_ref::<A>()
            .map(|a| a as &dyn Block)
            .ok_or_else(|| Error::Internal("block_from_array: dtype mismatch".into()))
    }

    match array.data_type() {
        DataType::Binary => downcast::<BinaryArray>(array),
        DataType::LargeBinary => downcast::<LargeBinaryArray>(array),
        DataType::Utf8 => downcast::<StringArray>(array),
        DataType::LargeUtf8 => downcast::<LargeStringArray>(array),
        other => Err(Error::invalid_type_parameter(format!(
            "{other} arrays cannot be read as variable-width blocks"
        ))),
    }
}
