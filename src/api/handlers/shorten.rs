//! Handler for the shortening endpoint.

use axum::extract::{Query, State};

use crate::api::dto::url_query::UrlQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the shortened URL for a long URL.
///
/// # Endpoint
///
/// `GET /shortened/?url=<url>`
///
/// # Response
///
/// - **200 OK**: plain-text body with the short URL, e.g. `http://localhost/3f9a0c1b7e2d4a68`
/// - **404 Not Found**: `The url was not valid! Make sure to start the url with http:// or https://`
///
/// Calling it again for the same URL returns the same short URL until the
/// key expires, after which a new key is issued.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<String, AppError> {
    state.shorten_service.shorten(query.url())
}
