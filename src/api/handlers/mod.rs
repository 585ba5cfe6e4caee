//! HTTP request handlers.
//!
//! Handlers only translate between HTTP and the services; all validation and
//! store access happens in [`crate::application::services`].

pub mod health;
pub mod original;
pub mod shorten;

pub use health::health_handler;
pub use original::original_handler;
pub use shorten::shorten_handler;
