//! Cryptographic utilities for identifier generation.

use rand::{rngs::OsRng, RngCore};

/// Number of random bytes in a generated record identifier.
pub const RECORD_ID_BYTES: usize = 16;

/// Generates a record identifier from the operating system CSPRNG.
///
/// The result is 32 lowercase hex characters (128 bits of entropy), so
/// identifiers generated outside a database do not collide in practice.
pub fn generate_record_id() -> String {
    let mut bytes = [0u8; RECORD_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Returns true if `id` looks like an identifier produced by [`generate_record_id`].
pub fn is_record_id(id: &str) -> bool {
    id.len() == RECORD_ID_BYTES * 2
        && id
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}
