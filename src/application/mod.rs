//! Application layer services implementing business logic.
//!
//! Services validate input, then read or mutate the shared
//! [`crate::domain::KeyStore`]. HTTP handlers call them and turn the results
//! into responses.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - long URL to short URL
//! - [`services::resolve_service::ResolveService`] - short URL back to long URL

pub mod services;
