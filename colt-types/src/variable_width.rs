//! Behaviour shared by every byte-string type.
//!
//! Values are compared over their full stored length; there is no padding and
//! no declared-length truncation.

use std::cmp::Ordering;

use colt_block::{Block, BlockBuilder, Slice};
use colt_result::Result;

/// Same length and same bytes. Lengths are checked first so values of
/// different sizes never reach a byte compare.
pub fn equal_to(
    left: &dyn Block,
    left_position: usize,
    right: &dyn Block,
    right_position: usize,
) -> Result<bool> {
    let left_length = left.get_length(left_position)?;
    let right_length = right.get_length(right_position)?;
    if left_length != right_length {
        return Ok(false);
    }
    left.equals(left_position, 0, right, right_position, 0, left_length)
}

pub fn hash(block: &dyn Block, position: usize) -> Result<u64> {
    let length = block.get_length(position)?;
    block.hash(position, 0, length)
}

/// Lexicographic unsigned byte order; a proper prefix sorts first.
pub fn compare_to(
    left: &dyn Block,
    left_position: usize,
    right: &dyn Block,
    right_position: usize,
) -> Result<Ordering> {
    let left_length = left.get_length(left_position)?;
    let right_length = right.get_length(right_position)?;
    left.compare_to(
        left_position,
        0,
        left_length,
        right,
        right_position,
        0,
        right_length,
    )
}

pub fn append_to(block: &dyn Block, position: usize, builder: &mut dyn BlockBuilder) -> Result<()> {
    if block.is_null(position)? {
        return builder.append_null();
    }
    let length = block.get_length(position)?;
    block.write_bytes_to(position, 0, length, builder)?;
    builder.close_entry()
}

pub fn get_slice(block: &dyn Block, position: usize) -> Result<Slice<'_>> {
    let length = block.get_length(position)?;
    block.get_slice(position, 0, length)
}

/// The range is validated before anything is written, so a failed call leaves
/// the builder as it was.
pub fn write_slice_range(
    builder: &mut dyn BlockBuilder,
    value: &[u8],
    offset: usize,
    length: usize,
) -> Result<()> {
    builder.write_bytes(value, offset, length)?;
    builder.close_entry()
}
