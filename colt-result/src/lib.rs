//! Error types and result definitions for the COLT value-type workspace.
//!
//! Every fallible operation in the `colt-*` crates returns [`Result<T>`], whose
//! error variant is the single [`Error`] enum. Errors are raised where a
//! contract is violated and propagate to the immediate caller unchanged; no
//! operation in this workspace retries.
//!
//! # Error Categories
//!
//! - **Type construction** ([`Error::InvalidTypeParameter`]): negative declared
//!   lengths, malformed signature parameters
//! - **Range violations** ([`Error::OutOfBounds`]): byte ranges or positions
//!   outside their buffer
//! - **Text decoding** ([`Error::InvalidEncoding`]): malformed UTF-8 under the
//!   strict materialization policy
//! - **Catalog conditions** ([`Error::AlreadyExists`]): duplicate names, carried
//!   with a stable [`ErrorCode`]
//! - **Columnar format** ([`Error::Arrow`]): failures bubbling up from Arrow

pub mod code;
pub mod error;
pub mod result;

pub use code::ErrorCode;
pub use error::Error;
pub use result::Result;
