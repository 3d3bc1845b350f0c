//! Position-addressed, variable-width column blocks.
//!
//! A *block* is a read-only column chunk: every position holds either a null or
//! a byte string. Value types never own storage; they read positions through
//! the [`Block`] trait and append through the [`BlockBuilder`] trait.
//!
//! Blocks are Arrow arrays. [`Block`] is implemented for every
//! `GenericByteArray` (`BinaryArray`, `LargeBinaryArray`, `StringArray`,
//! `LargeStringArray`), so columns produced anywhere in an Arrow pipeline can
//! be read without conversion. [`VariableWidthBlockBuilder`] stages bytes for
//! the open entry and emits a `BinaryArray` when finished.
//!
//! Reads hand out [`Slice`] views that borrow the block's value buffer; they
//! cannot outlive the block they came from.

#![forbid(unsafe_code)]

pub mod block;
pub mod builder;
pub mod hash;
pub mod slice;

pub use block::{Block, block_from_array};
pub use builder::{BlockBuilder, VariableWidthBlockBuilder};
pub use hash::hash_bytes;
pub use slice::{Slice, checked_range};
