//! Random key generation.

use rand::RngCore;

/// Number of random bytes behind each key.
const KEY_BYTES: usize = 8;

/// Length of a generated key in characters (two hex digits per byte).
pub const KEY_LENGTH: usize = KEY_BYTES * 2;

/// Produces candidate keys.
///
/// Implementations do not need to guarantee uniqueness: the
/// [`KeyStore`](crate::domain::key_store::KeyStore) retries on collision.
#[cfg_attr(test, mockall::automock)]
pub trait KeySource: Send + Sync {
    fn next_key(&self) -> String;
}

/// Generates 64-bit random keys encoded as 16 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHexKeySource;

impl KeySource for RandomHexKeySource {
    fn next_key(&self) -> String {
        let mut buffer = [0u8; KEY_BYTES];
        rand::rng().fill_bytes(&mut buffer);
        hex::encode(buffer)
    }
}
