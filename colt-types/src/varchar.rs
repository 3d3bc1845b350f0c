//! Character strings with an advisory maximum length.

use std::any::Any;
use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

use colt_block::{Block, BlockBuilder, Slice};
use colt_result::{Error, Result};

use crate::object::{MaterializeOptions, ObjectValue};
use crate::signature::{TypeSignature, standard_types};
use crate::types::Type;
use crate::variable_width;

/// `VARCHAR(n)`: UTF-8 text stored as raw bytes.
///
/// The declared length only shapes the signature. Stored values are never
/// truncated or validated against it, and comparison, hashing and copying
/// work on whatever bytes the block holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarcharType {
    length: u64,
    signature: TypeSignature,
}

impl VarcharType {
    /// Declared length of the canonical unparameterized instance.
    pub const DEFAULT_LENGTH: u64 = 1;

    /// Create `varchar(length)`. Negative lengths are rejected.
    pub fn create(length: i64) -> Result<Self> {
        let Ok(declared) = u64::try_from(length) else {
            tracing::debug!(length, "rejected negative varchar length");
            return Err(Error::invalid_type_parameter(format!(
                "Invalid VARCHAR length {length}"
            )));
        };
        Ok(Self::with_length(declared))
    }

    fn with_length(length: u64) -> Self {
        let literal = i64::try_from(length).unwrap_or(i64::MAX);
        Self {
            length,
            signature: TypeSignature::varchar(literal),
        }
    }

    /// Build from a parsed signature such as `varchar(12)`.
    pub fn from_signature(signature: &TypeSignature) -> Result<Self> {
        if signature.base() != standard_types::VARCHAR || !signature.type_parameters().is_empty() {
            return Err(Error::invalid_type_parameter(format!(
                "{signature} is not a varchar signature"
            )));
        }
        match signature.literal_parameters() {
            [] => Ok(Self::default()),
            [length] => Self::create(*length),
            params => Err(Error::invalid_type_parameter(format!(
                "varchar takes one length parameter, got {}",
                params.len()
            ))),
        }
    }

    /// The declared maximum length.
    #[inline]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Write `value` as UTF-8 into one closed entry.
    pub fn write_string(&self, builder: &mut dyn BlockBuilder, value: &str) -> Result<()> {
        self.write_slice(builder, value.as_bytes())
    }
}

impl Default for VarcharType {
    fn default() -> Self {
        Self::with_length(Self::DEFAULT_LENGTH)
    }
}

/// The shared canonical `varchar(1)` instance.
pub fn varchar() -> &'static VarcharType {
    static VARCHAR: OnceLock<VarcharType> = OnceLock::new();
    VARCHAR.get_or_init(VarcharType::default)
}

impl Type for VarcharType {
    #[inline]
    fn signature(&self) -> &TypeSignature {
        &self.signature
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    #[inline]
    fn is_comparable(&self) -> bool {
        true
    }

    #[inline]
    fn is_orderable(&self) -> bool {
        true
    }

    fn object_value_with<'a>(
        &self,
        options: &MaterializeOptions,
        block: &'a dyn Block,
        position: usize,
    ) -> Result<Option<ObjectValue<'a>>> {
        if block.is_null(position)? {
            return Ok(None);
        }
        let slice = variable_width::get_slice(block, position)?;
        let text = options.utf8.decode(slice.as_bytes())?;
        Ok(Some(ObjectValue::Str(text)))
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

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::BinaryArray;
    use colt_block::VariableWidthBlockBuilder;

    #[test]
    fn create_accepts_zero_and_rejects_negative() {
        assert_eq!(VarcharType::create(0).unwrap().length(), 0);
        assert_eq!(VarcharType::create(255).unwrap().length(), 255);
        let err = VarcharType::create(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidTypeParameter(_)));
        assert!(err.to_string().contains("Invalid VARCHAR length -1"));
    }

    #[test]
    fn signature_follows_declared_length() {
        let a = VarcharType::create(7).unwrap();
        let b = VarcharType::create(7).unwrap();
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a, b);
        assert_eq!(a.display_name(), "varchar(7)");
        assert_ne!(a.signature(), VarcharType::create(8).unwrap().signature());
    }

    #[test]
    fn canonical_instance_is_length_one() {
        assert_eq!(varchar().length(), 1);
        assert_eq!(varchar().signature(), &TypeSignature::varchar(1));
        assert!(std::ptr::eq(varchar(), varchar()));
        assert!(varchar().is_comparable());
        assert!(varchar().is_orderable());
    }

    #[test]
    fn from_signature_checks_shape() {
        let sig = TypeSignature::parse("VARCHAR(12)").unwrap();
        assert_eq!(VarcharType::from_signature(&sig).unwrap().length(), 12);
        assert_eq!(
            VarcharType::from_signature(&TypeSignature::simple("varchar"))
                .unwrap()
                .length(),
            1
        );
        for bad in ["varchar(-3)", "varchar(1,2)", "varbinary", "varchar(varbinary)"] {
            let sig = TypeSignature::parse(bad).unwrap();
            assert!(VarcharType::from_signature(&sig).is_err(), "{bad}");
        }
    }

    #[test]
    fn declared_length_is_advisory() {
        let tiny = VarcharType::create(2).unwrap();
        let mut b = VariableWidthBlockBuilder::new();
        tiny.write_string(&mut b, "longer than two").unwrap();
        let block = b.finish().unwrap();
        let value = tiny.object_value(&block, 0).unwrap().unwrap();
        assert_eq!(value.as_str(), Some("longer than two"));
    }

    #[test]
    fn malformed_text_follows_the_policy() {
        let block = BinaryArray::from(vec![Some(&[b'h', b'i', 0xFE][..])]);
        let ty = varchar();
        assert!(matches!(
            ty.object_value(&block, 0),
            Err(Error::InvalidEncoding(_))
        ));
        let lossy = ty
            .object_value_with(&MaterializeOptions::lossy(), &block, 0)
            .unwrap()
            .unwrap();
        assert_eq!(lossy.as_str(), Some("hi\u{FFFD}"));
        // Bytes are still usable opaquely.
        assert_eq!(ty.get_slice(&block, 0).unwrap().len(), 3);
    }
}
