//! API route configuration.

use crate::api::handlers::{health_handler, original_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes. None of them require authentication.
///
/// # Endpoints
///
/// - `GET /shortened?url=<url>`        - Short URL for a long URL
/// - `GET /original?url=<short url>`   - Original URL for a short URL
/// - `GET /health`                     - Service status
///
/// Paths are registered without a trailing slash; the top-level router
/// trims it so `/shortened/` and `/original/` resolve here too.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shortened", get(shorten_handler))
        .route("/original", get(original_handler))
        .route("/health", get(health_handler))
}
