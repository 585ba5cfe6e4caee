//! Query string shared by the shorten and resolve endpoints.

use serde::Deserialize;

/// `?url=<value>` query parameter.
///
/// A missing parameter deserializes to `None` and is treated as an invalid
/// URL by the handlers rather than as a malformed request.
#[derive(Debug, Default, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

impl UrlQuery {
    /// Returns the parameter value, or an empty string when absent.
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}
