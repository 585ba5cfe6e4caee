//! Core domain entities.
//!
//! - [`UrlRecord`] - the original URL behind a key and its creation time

pub mod url_record;

pub use url_record::{EXPIRY_WINDOW_SECS, UrlRecord};
