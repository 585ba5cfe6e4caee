//! Domain layer: the key store and the capabilities it depends on.
//!
//! - [`entities`] - [`entities::UrlRecord`] and the expiry window
//! - [`key_store`] - bidirectional URL/key mapping with collision-retry key generation
//! - [`key_source`] - random key generation behind the [`key_source::KeySource`] trait
//! - [`clock`] - current time behind the [`clock::Clock`] trait
//!
//! Nothing in this layer knows about HTTP.

pub mod clock;
pub mod entities;
pub mod key_source;
pub mod key_store;

pub use clock::{Clock, SystemClock};
pub use key_source::{KEY_LENGTH, KeySource, RandomHexKeySource};
pub use key_store::{KeyStore, MAX_KEY_ATTEMPTS, SharedKeyStore};

#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use key_source::MockKeySource;
