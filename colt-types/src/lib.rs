//! Logical value types for variable-width columns.
//!
//! A type here is a *behaviour table*: it owns no data and answers questions
//! about values stored at `(block, position)` pairs supplied by the caller.
//! Every type implements the [`Type`] trait; related encodings such as
//! [`VarcharType`] and [`VarbinaryType`] are sibling implementations rather
//! than a class hierarchy, and a [`TypeRegistry`] selects them by
//! [`TypeSignature`].
//!
//! # Contract
//!
//! For every type, equality, ordering and hashing agree with each other and
//! with the bytes physically stored in the block:
//!
//! - `equal_to(a, b)` implies `hash(a) == hash(b)`
//! - `compare_to` is a total order whose zero case is exactly `equal_to`
//! - `append_to` followed by a read returns byte-identical content and the
//!   same nullness
//!
//! ```
//! use colt_block::{BlockBuilder, VariableWidthBlockBuilder};
//! use colt_types::{Type, VarcharType};
//!
//! let varchar = VarcharType::create(16).unwrap();
//! let mut builder = VariableWidthBlockBuilder::new();
//! varchar.write_string(&mut builder, "ab").unwrap();
//! builder.append_null().unwrap();
//! let block = builder.finish().unwrap();
//!
//! let value = varchar.object_value(&block, 0).unwrap().unwrap();
//! assert_eq!(value.as_str(), Some("ab"));
//! assert!(varchar.object_value(&block, 1).unwrap().is_none());
//! ```

#![forbid(unsafe_code)]

pub mod object;
pub mod registry;
pub mod signature;
pub mod types;
pub mod varbinary;
pub mod varchar;
pub mod variable_width;

pub use object::{MaterializeOptions, ObjectValue, Utf8Policy};
pub use registry::TypeRegistry;
pub use signature::{TypeSignature, standard_types};
pub use types::Type;
pub use varbinary::VarbinaryType;
pub use varchar::{VarcharType, varchar};
