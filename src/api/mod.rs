//! HTTP layer translating requests into service calls.
//!
//! # Modules
//!
//! - [`dto`] - query and response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - request tracing
//! - [`routes`] - route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
