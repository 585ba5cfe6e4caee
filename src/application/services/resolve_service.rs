//! Resolution service: short URL back to the original URL.

use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::domain::{Clock, SharedKeyStore};
use crate::error::AppError;
use crate::utils::url_validator::ShortUrlPattern;

/// Service returning the original URL behind a short URL.
///
/// Resolution only reads the store. Expired records are reported as expired
/// but left in place; they are replaced by the next shorten call for the
/// same original URL.
pub struct ResolveService {
    store: SharedKeyStore,
    clock: Arc<dyn Clock>,
    pattern: ShortUrlPattern,
}

impl ResolveService {
    /// Creates a new resolve service.
    pub fn new(store: SharedKeyStore, clock: Arc<dyn Clock>, pattern: ShortUrlPattern) -> Self {
        Self {
            store,
            clock,
            pattern,
        }
    }

    /// Returns the original URL for `short_url`.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortUrl`] if `short_url` is not `<prefix><16 chars>`
    /// - [`AppError::KeyNotFound`] if no record exists for the key
    /// - [`AppError::KeyExpired`] if the record is older than the expiry window
    pub fn resolve(&self, short_url: &str) -> Result<String, AppError> {
        let Some(key) = self.pattern.key_of(short_url) else {
            debug!(%short_url, "Rejected malformed short url");
            counter!("shortener_resolve_total", "outcome" => "invalid").increment(1);
            return Err(AppError::InvalidShortUrl {
                prefix: self.pattern.prefix().to_string(),
            });
        };

        let store = self.store.read();

        let Some(record) = store.lookup_record_for(key) else {
            debug!(%key, "No record for key");
            counter!("shortener_resolve_total", "outcome" => "not_found").increment(1);
            return Err(AppError::KeyNotFound {
                key: key.to_string(),
            });
        };

        if store.is_expired(key, self.clock.now()) {
            debug!(%key, url = %record.original_url, "Key has expired");
            counter!("shortener_resolve_total", "outcome" => "expired").increment(1);
            return Err(AppError::KeyExpired {
                url: record.original_url.clone(),
            });
        }

        counter!("shortener_resolve_total", "outcome" => "hit").increment(1);
        Ok(record.original_url.clone())
    }

    /// Prefix expected in front of every key.
    pub fn prefix(&self) -> &str {
        self.pattern.prefix()
    }
}
