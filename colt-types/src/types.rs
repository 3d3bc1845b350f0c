use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use colt_block::{Block, BlockBuilder, Slice};
use colt_result::Result;

use crate::object::{MaterializeOptions, ObjectValue};
use crate::signature::TypeSignature;

/// Operations a logical type provides over values stored in blocks.
///
/// Implementations are immutable and shared across threads. Value operations
/// are pure functions of their `(block, position)` arguments except the
/// explicit builder writes.
///
/// Null handling is split deliberately: [`equal_to`](Type::equal_to),
/// [`compare_to`](Type::compare_to) and [`hash`](Type::hash) assume non-null
/// operands (the caller checks nullness), while
/// [`object_value`](Type::object_value) and [`append_to`](Type::append_to)
/// propagate nulls themselves.
pub trait Type: Send + Sync + fmt::Debug {
    /// Structural identity used for registry lookup.
    fn signature(&self) -> &TypeSignature;

    /// Type-erase a shared instance so callers can recover the concrete type.
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    fn display_name(&self) -> String {
        self.signature().to_string()
    }

    fn is_comparable(&self) -> bool;

    fn is_orderable(&self) -> bool;

    /// Materialize the value at `position` with default (strict) options;
    /// `None` for null.
    fn object_value<'a>(
        &self,
        block: &'a dyn Block,
        position: usize,
    ) -> Result<Option<ObjectValue<'a>>> {
        self.object_value_with(&MaterializeOptions::default(), block, position)
    }

    fn object_value_with<'a>(
        &self,
        options: &MaterializeOptions,
        block: &'a dyn Block,
        position: usize,
    ) -> Result<Option<ObjectValue<'a>>>;

    fn equal_to(
        &self,
        left: &dyn Block,
        left_position: usize,
        right: &dyn Block,
        right_position: usize,
    ) -> Result<bool>;

    fn hash(&self, block: &dyn Block, position: usize) -> Result<u64>;

    fn compare_to(
        &self,
        left: &dyn Block,
        left_position: usize,
        right: &dyn Block,
        right_position: usize,
    ) -> Result<Ordering>;

    /// Copy the value at `position`, null or not, as the next entry of `builder`.
    fn append_to(
        &self,
        block: &dyn Block,
        position: usize,
        builder: &mut dyn BlockBuilder,
    ) -> Result<()>;

    /// Zero-copy view of the whole value at `position`.
    fn get_slice<'a>(&self, block: &'a dyn Block, position: usize) -> Result<Slice<'a>>;

    /// Write `value[offset..offset + length]` as one closed entry.
    fn write_slice_range(
        &self,
        builder: &mut dyn BlockBuilder,
        value: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<()>;

    /// Write all of `value` as one closed entry.
    fn write_slice(&self, builder: &mut dyn BlockBuilder, value: &[u8]) -> Result<()> {
        self.write_slice_range(builder, value, 0, value.len())
    }
}
