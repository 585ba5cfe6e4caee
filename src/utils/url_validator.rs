//! Input classification for long URLs and shortened URLs.
//!
//! Both checks are pure: they never touch the store and are applied before
//! any lookup happens.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::KEY_LENGTH;

/// Prefix used for shortened URLs when none is configured.
pub const DEFAULT_PREFIX: &str = "http://localhost/";

/// Grammar for URLs accepted by the shortener.
///
/// Scheme `http://` or `https://`, optional `www.`, a host with at least one
/// dot and a 1-6 character TLD, then an arbitrary path/query tail. Only the
/// start is anchored, so anything may follow a well-formed head.
static LONG_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

/// Returns true if `s` looks like an `http`/`https` URL with a dotted host.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::url_validator::is_well_formed_long_url;
///
/// assert!(is_well_formed_long_url("https://www.youtube.com"));
/// assert!(!is_well_formed_long_url("youtube.com"));
/// assert!(!is_well_formed_long_url("http://localhost:5000"));
/// ```
pub fn is_well_formed_long_url(s: &str) -> bool {
    LONG_URL_REGEX.is_match(s)
}

/// Matcher for `<prefix><16 lowercase alphanumerics>`, anchored at both ends.
#[derive(Debug, Clone)]
pub struct ShortUrlPattern {
    prefix: String,
    regex: Regex,
}

impl ShortUrlPattern {
    /// Compiles the pattern for `prefix`. The prefix is matched literally.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern exceeds the regex size limit.
    pub fn new(prefix: impl Into<String>) -> Result<Self, regex::Error> {
        let prefix = prefix.into();
        let regex = Regex::new(&format!(
            "^{}[a-z0-9]{{{}}}$",
            regex::escape(&prefix),
            KEY_LENGTH
        ))?;

        Ok(Self { prefix, regex })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true if `s` is exactly the prefix followed by a 16-character key.
    pub fn is_well_formed(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    /// Returns the key part of a well-formed short URL.
    pub fn key_of<'a>(&self, s: &'a str) -> Option<&'a str> {
        if !self.is_well_formed(s) {
            return None;
        }
        s.strip_prefix(self.prefix.as_str())
    }
}

impl Default for ShortUrlPattern {
    fn default() -> Self {
        DEFAULT_SHORT_URL_PATTERN.clone()
    }
}

static DEFAULT_SHORT_URL_PATTERN: LazyLock<ShortUrlPattern> =
    LazyLock::new(|| ShortUrlPattern::new(DEFAULT_PREFIX).unwrap());

/// Returns true if `s` is a shortened URL under [`DEFAULT_PREFIX`].
pub fn is_well_formed_short_url(s: &str) -> bool {
    DEFAULT_SHORT_URL_PATTERN.is_well_formed(s)
}
