//! Shared helpers for COLT test binaries.

use std::sync::Once;

use arrow::array::BinaryArray;
use colt_block::{BlockBuilder, VariableWidthBlockBuilder};
use colt_result::Result;
use rand::Rng;

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(feature = "auto-init")]
mod auto {
    // Use ctor to run at binary init time to avoid having to call init in every test.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}

/// Build a block holding `values` in order, `None` as null.
pub fn block_of<V: AsRef<[u8]>>(values: &[Option<V>]) -> Result<BinaryArray> {
    let mut builder = VariableWidthBlockBuilder::new();
    for value in values {
        match value {
            Some(bytes) => {
                let bytes = bytes.as_ref();
                builder.write_bytes(bytes, 0, bytes.len())?;
                builder.close_entry()?;
            }
            None => builder.append_null()?,
        }
    }
    builder.finish()
}

/// Random byte string of `0..=max_len` bytes drawn from `alphabet`.
///
/// A small alphabet makes equal values and shared prefixes common, which is
/// what ordering and hashing checks need.
pub fn random_value<R: Rng>(rng: &mut R, max_len: usize, alphabet: &[u8]) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
