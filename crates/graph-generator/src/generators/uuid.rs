//! RNG-driven UUIDs and the identifiers derived from them.

use rand::Rng;
use uuid::Uuid;

/// UUID v4 drawn from `rng`, so identifiers follow the run's seed.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes: [u8; 16] = rng.gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}

/// `prefix` followed by 32 lowercase hex digits.
///
/// Starts with a letter, so the result is usable as a bare Cypher variable.
pub fn prefixed_id<R: Rng>(prefix: char, rng: &mut R) -> String {
    format!("{prefix}{}", generate_uuid_v4(rng).simple())
}
