//! Helper functions shared across layers.
//!
//! - [`url_validator`] - long URL and short URL classification

pub mod url_validator;
