//! COLT: variable-width value types over Arrow column blocks.
//!
//! This crate is the entrypoint for the workspace. It re-exports the value
//! types, the block abstractions they operate on, and the shared error type
//! from the underlying `colt-*` crates.
//!
//! # Quick Start
//!
//! ```rust
//! use colt::block::{BlockBuilder, VariableWidthBlockBuilder};
//! use colt::{Type, TypeRegistry};
//!
//! let registry = TypeRegistry::with_standard_types().unwrap();
//! let name = registry.varchar(32).unwrap();
//!
//! let mut builder = VariableWidthBlockBuilder::new();
//! name.write_string(&mut builder, "ada").unwrap();
//! name.write_string(&mut builder, "ada").unwrap();
//! builder.append_null().unwrap();
//! let block = builder.finish().unwrap();
//!
//! assert!(name.equal_to(&block, 0, &block, 1).unwrap());
//! assert!(name.object_value(&block, 2).unwrap().is_none());
//! ```
//!
//! # Architecture
//!
//! - **Types** (`colt-types`): signatures, the [`Type`] trait, varchar and
//!   varbinary, and the signature-keyed registry.
//! - **Blocks** (`colt-block`): the read/write block traits, Arrow-backed
//!   blocks, zero-copy slices.
//! - **Errors** (`colt-result`): the unified [`Error`] and [`Result`].

pub use colt_types::{
    MaterializeOptions, ObjectValue, Type, TypeRegistry, TypeSignature, Utf8Policy,
    VarbinaryType, VarcharType, standard_types, varchar,
};

pub mod block {
    //! Block abstractions and the Arrow-backed implementations.

    pub use colt_block::{
        Block, BlockBuilder, Slice, VariableWidthBlockBuilder, block_from_array, hash_bytes,
    };
}

pub use colt_result::{Error, ErrorCode, Result};
