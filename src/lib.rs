//! # URL Shortener
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! Given a long URL it returns a short alias of the form
//! `<prefix><16 hex characters>`; given a short alias it returns the original
//! URL for seven days after the alias was issued.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - the bidirectional key store, key source and clock
//! - **Application Layer** ([`application`]) - shorten and resolve services
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - URL validation
//!
//! ## Expiry
//!
//! Keys expire lazily. Resolving an expired key reports it as expired but
//! leaves the record in place; the next shorten call for the same original
//! URL drops the old pair and issues a new key.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! Nothing is persisted: all state is lost when the process exits.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolveService, ShortenService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::{Clock, KeySource, KeyStore, SharedKeyStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
