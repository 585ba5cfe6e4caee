//! Bidirectional in-memory mapping between original URLs and keys.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::key_source::KeySource;
use crate::error::AppError;

/// Maximum number of candidate keys tried before giving up.
pub const MAX_KEY_ATTEMPTS: usize = 10;

/// Store shared between the services.
///
/// Shortening takes the write lock for its whole lookup/replace/insert
/// sequence; resolving only ever takes the read lock.
pub type SharedKeyStore = Arc<RwLock<KeyStore>>;

/// Two maps kept in sync: `url -> key` and `key -> record`.
///
/// Every `(url, key)` pair in `url_to_key` has a matching record in
/// `key_to_record` whose `original_url` is `url`, and the other way round.
/// Only [`KeyStore::put`] and [`KeyStore::remove`] mutate, and both touch the
/// two maps together.
#[derive(Debug, Default)]
pub struct KeyStore {
    url_to_key: HashMap<String, String>,
    key_to_record: HashMap<String, UrlRecord>,
}

impl KeyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped for sharing between request handlers.
    pub fn shared() -> SharedKeyStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Returns the current key for `url`, if any.
    pub fn lookup_key_for(&self, url: &str) -> Option<&str> {
        self.url_to_key.get(url).map(String::as_str)
    }

    /// Returns the record stored under `key`, if any.
    pub fn lookup_record_for(&self, key: &str) -> Option<&UrlRecord> {
        self.key_to_record.get(key)
    }

    /// Inserts a new pair into both maps.
    ///
    /// The caller guarantees `key` is not in use, normally by obtaining it
    /// from [`KeyStore::generate_unique_key`] under the same write lock.
    pub fn put(&mut self, url: &str, key: &str, created_at: DateTime<Utc>) {
        debug_assert!(!self.key_to_record.contains_key(key));

        self.url_to_key.insert(url.to_string(), key.to_string());
        self.key_to_record
            .insert(key.to_string(), UrlRecord::new(url, created_at));
    }

    /// Removes a pair from both maps.
    pub fn remove(&mut self, url: &str, key: &str) {
        self.url_to_key.remove(url);
        self.key_to_record.remove(key);
    }

    /// Draws keys from `source` until one is not in use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyGenerationExhausted`] after
    /// [`MAX_KEY_ATTEMPTS`] consecutive collisions.
    pub fn generate_unique_key(&self, source: &dyn KeySource) -> Result<String, AppError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = source.next_key();

            if !self.key_to_record.contains_key(&key) {
                return Ok(key);
            }

            tracing::debug!(%key, "Generated key already in use, retrying");
        }

        Err(AppError::KeyGenerationExhausted {
            attempts: MAX_KEY_ATTEMPTS,
        })
    }

    /// Returns true if the record under `key` is older than the expiry window.
    ///
    /// Unknown keys are reported as not expired.
    pub fn is_expired(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.key_to_record
            .get(key)
            .is_some_and(|record| record.is_expired_at(now))
    }

    /// Number of stored pairs, expired ones included.
    pub fn len(&self) -> usize {
        self.key_to_record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_to_record.is_empty()
    }
}
