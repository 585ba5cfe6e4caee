//! Handler for the resolution endpoint.

use axum::extract::{Query, State};

use crate::api::dto::url_query::UrlQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short URL.
///
/// # Endpoint
///
/// `GET /original/?url=<short url>`
///
/// # Response
///
/// - **200 OK**: plain-text body with the original URL
/// - **404 Not Found** with one of:
///   - `The url was not valid! Make sure to start the url with <prefix>`
///   - `No url for key <key> was found!`
///   - `The key for <url> has expired!`
pub async fn original_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<String, AppError> {
    state.resolve_service.resolve(query.url())
}
