use rustc_hash::FxHasher;
use std::hash::Hasher;

// Stable salt; changing it changes every persisted hash.
const VALUE_HASH_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Content hash of a value's bytes.
///
/// Depends only on the bytes, never on where they are stored, and is stable
/// across processes (FxHash has no per-process random state).
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut h = FxHasher::default();
    h.write_u64(VALUE_HASH_SEED);
    h.write_u64(bytes.len() as u64);
    h.write(bytes);
    h.finish()
}
