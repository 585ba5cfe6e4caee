//! Shortening service: lookup-or-create with expiry-aware replacement.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, error, info};

use crate::domain::{Clock, KeySource, SharedKeyStore};
use crate::error::AppError;
use crate::utils::url_validator::is_well_formed_long_url;

/// Service returning the short URL for a long URL.
///
/// A URL that already has a live key always gets that key back. A URL whose
/// key has expired gets a new key, and the expired pair is dropped from the
/// store in the same critical section.
pub struct ShortenService {
    store: SharedKeyStore,
    key_source: Arc<dyn KeySource>,
    clock: Arc<dyn Clock>,
    prefix: String,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(
        store: SharedKeyStore,
        key_source: Arc<dyn KeySource>,
        clock: Arc<dyn Clock>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            key_source,
            clock,
            prefix: prefix.into(),
        }
    }

    /// Returns the short URL for `url`, minting a key if needed.
    ///
    /// The lookup, expiry check, removal and insertion all happen under one
    /// write lock, so two concurrent calls for the same URL cannot both mint
    /// a key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLongUrl`] if `url` is not a well-formed
    /// `http`/`https` URL. The store is not touched in that case.
    ///
    /// Returns [`AppError::KeyGenerationExhausted`] if no free key could be
    /// produced. The store is left unchanged.
    pub fn shorten(&self, url: &str) -> Result<String, AppError> {
        if !is_well_formed_long_url(url) {
            debug!(%url, "Rejected malformed long url");
            return Err(AppError::InvalidLongUrl);
        }

        let mut store = self.store.write();
        let now = self.clock.now();

        let expired_key = match store.lookup_key_for(url) {
            Some(key) if !store.is_expired(key, now) => {
                return Ok(self.short_url(key));
            }
            Some(key) => Some(key.to_string()),
            None => None,
        };

        let key = store
            .generate_unique_key(self.key_source.as_ref())
            .inspect_err(|e| error!(%url, error = %e, "Key generation failed"))?;

        if let Some(old_key) = expired_key {
            store.remove(url, &old_key);
            counter!("shortener_keys_regenerated_total").increment(1);
            info!(%url, %old_key, new_key = %key, "Replaced expired key");
        }

        store.put(url, &key, now);
        counter!("shortener_urls_shortened_total").increment(1);
        debug!(%url, %key, "Minted key");

        Ok(self.short_url(&key))
    }

    /// Prefix prepended to every key.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn short_url(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;
    use crate::domain::{KeyStore, MAX_KEY_ATTEMPTS, MockClock, MockKeySource};
    use chrono::{DateTime, TimeZone, Utc};

    const KEYS: [&str; 3] = ["fbk2fmwkuoeqrmda", "fbk2fmwkuoeqjmdb", "fbk203wkupeqomdc"];
    const URL: &str = "https://hiqfinland.fi/avoimet-tyopaikat/";

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn clock_at(times: &[i64]) -> MockClock {
        let mut times = times.iter().map(|&t| at(t)).collect::<Vec<_>>().into_iter();
        let mut clock = MockClock::new();
        clock.expect_now().returning(move || times.next().unwrap());
        clock
    }

    fn keys(sequence: &[&'static str]) -> MockKeySource {
        let mut sequence = sequence.to_vec().into_iter();
        let mut source = MockKeySource::new();
        source
            .expect_next_key()
            .returning(move || sequence.next().unwrap().to_string());
        source
    }

    fn service(store: &SharedKeyStore, source: MockKeySource, clock: MockClock) -> ShortenService {
        ShortenService::new(
            store.clone(),
            Arc::new(source),
            Arc::new(clock),
            "http://localhost/",
        )
    }

    #[test]
    fn test_shorten_returns_prefixed_key() {
        let store = KeyStore::shared();
        let service = service(&store, keys(&[KEYS[0]]), clock_at(&[1000]));

        let result = service.shorten(URL).unwrap();

        assert_eq!(result, format!("http://localhost/{}", KEYS[0]));
    }

    #[test]
    fn test_shorten_invalid_url_does_not_touch_store() {
        let store = KeyStore::shared();
        let mut source = MockKeySource::new();
        source.expect_next_key().times(0);
        let mut clock = MockClock::new();
        clock.expect_now().times(0);
        let service = service(&store, source, clock);

        let err = service.shorten("invalid").unwrap_err();

        assert_eq!(err, AppError::InvalidLongUrl);
        assert!(store.read().is_empty());
    }

    #[test]
    fn test_shorten_new_urls_fill_both_maps() {
        let store = KeyStore::shared();
        let service = service(&store, keys(&[KEYS[0], KEYS[1]]), clock_at(&[12345, 12350]));

        service.shorten(URL).unwrap();
        service.shorten("https://www.youtube.com").unwrap();

        let store = store.read();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup_key_for(URL), Some(KEYS[0]));
        assert_eq!(store.lookup_key_for("https://www.youtube.com"), Some(KEYS[1]));
        assert_eq!(
            store.lookup_record_for(KEYS[0]),
            Some(&UrlRecord::new(URL, at(12345)))
        );
        assert_eq!(
            store.lookup_record_for(KEYS[1]),
            Some(&UrlRecord::new("https://www.youtube.com", at(12350)))
        );
    }

    #[test]
    fn test_shorten_skips_colliding_keys() {
        let store = KeyStore::shared();
        let service = service(
            &store,
            keys(&[KEYS[0], KEYS[0], KEYS[1]]),
            clock_at(&[1000, 1001]),
        );

        service.shorten(URL).unwrap();
        let second = service.shorten("https://youtube.com").unwrap();

        assert_eq!(second, format!("http://localhost/{}", KEYS[1]));
        assert_eq!(store.read().lookup_key_for(URL), Some(KEYS[0]));
    }

    #[test]
    fn test_shorten_is_idempotent_while_live() {
        let store = KeyStore::shared();
        let mut source = MockKeySource::new();
        source
            .expect_next_key()
            .times(1)
            .returning(|| KEYS[0].to_string());
        let service = service(&store, source, clock_at(&[1000, 605_800]));

        let first = service.shorten(URL).unwrap();
        let second = service.shorten(URL).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            store.read().lookup_record_for(KEYS[0]),
            Some(&UrlRecord::new(URL, at(1000)))
        );
    }

    #[test]
    fn test_shorten_replaces_expired_key() {
        let store = KeyStore::shared();
        let service = service(&store, keys(&[KEYS[0], KEYS[1]]), clock_at(&[1000, 605_802]));

        service.shorten(URL).unwrap();
        let result = service.shorten(URL).unwrap();

        assert_eq!(result, format!("http://localhost/{}", KEYS[1]));

        let store = store.read();
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup_key_for(URL), Some(KEYS[1]));
        assert!(store.lookup_record_for(KEYS[0]).is_none());
        assert_eq!(
            store.lookup_record_for(KEYS[1]),
            Some(&UrlRecord::new(URL, at(605_802)))
        );
    }

    #[test]
    fn test_shorten_exhausted_key_generation_leaves_store_unchanged() {
        let store = KeyStore::shared();
        store.write().put("https://youtube.com", KEYS[0], at(1000));

        let mut source = MockKeySource::new();
        source
            .expect_next_key()
            .times(MAX_KEY_ATTEMPTS)
            .returning(|| KEYS[0].to_string());
        let service = service(&store, source, clock_at(&[1001]));

        let err = service.shorten(URL).unwrap_err();

        assert!(matches!(err, AppError::KeyGenerationExhausted { .. }));
        assert_eq!(store.read().len(), 1);
        assert!(store.read().lookup_key_for(URL).is_none());
    }
}
