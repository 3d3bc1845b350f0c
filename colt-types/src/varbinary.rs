//! Unbounded opaque byte strings.

use std::borrow::Cow;
use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use colt_block::{Block, BlockBuilder, Slice};
use colt_result::{Error, Result};

use crate::object::{MaterializeOptions, ObjectValue};
use crate::signature::{TypeSignature, standard_types};
use crate::types::Type;
use crate::variable_width;

/// `VARBINARY`: same storage and ordering as varchar, materialized as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarbinaryType {
    signature: TypeSignature,
}

impl VarbinaryType {
    pub fn new() -> Self {
        Self {
            signature: TypeSignature::simple(standard_types::VARBINARY),
        }
    }

    pub fn from_signature(signature: &TypeSignature) -> Result<Self> {
        let plain = signature.type_parameters().is_empty()
            && signature.literal_parameters().is_empty();
        if signature.base() != standard_types::VARBINARY || !plain {
            return Err(Error::invalid_type_parameter(format!(
                "{signature} is not a varbinary signature"
            )));
        }
        Ok(Self::new())
    }
}

impl Default for VarbinaryType {
    fn default() -> Self {
        Self::new()
    }
}

impl Type for VarbinaryType {
    fn signature(&self) -> &TypeSignature {
        &self.signature
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn is_comparable(&self) -> bool {
        true
    }

    fn is_orderable(&self) -> bool {
        true
    }

    // Options only affect text decoding, which varbinary never does.
    fn object_value_with<'a>(
        &self,
        _options: &MaterializeOptions,
        block: &'a dyn Block,
        position: usize,
    ) -> Result<Option<ObjectValue<'a>>> {
        if block.is_null(position)? {
            return Ok(None);
        }
        let slice = variable_width::get_slice(block, position)?;
        Ok(Some(ObjectValue::Bytes(Cow::Borrowed(slice.as_bytes()))))
    }

    fn equal_to(
        &self,
        left: &dyn Block,
        left_position: usize,
        right: &dyn Block,
        right_position: usize,
    ) -> Result<bool> {
        variable_width::equal_to(left, left_position, right, right_position)
    }

    fn hash(&self, block: &dyn Block, position: usize) -> Result<u64> {
        variable_width::hash(block, position)
    }

    fn compare_to(
        &self,
        left: &dyn Block,
        left_position: usize,
        right: &dyn Block,
        right_position: usize,
    ) -> Result<Ordering> {
        variable_width::compare_to(left, left_position, right, right_position)
    }

    fn append_to(
        &self,
        block: &dyn Block,
        position: usize,
        builder: &mut dyn BlockBuilder,
    ) -> Result<()> {
        variable_width::append_to(block, position, builder)
    }

    fn get_slice<'a>(&self, block: &'a dyn Block, position: usize) -> Result<Slice<'a>> {
        variable_width::get_slice(block, position)
    }

    fn write_slice_range(
        &self,
        builder: &mut dyn BlockBuilder,
        value: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<()> {
        variable_width::write_slice_range(builder, value, offset, length)
    }
}
