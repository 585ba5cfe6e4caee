use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::SharedKeyStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    pub store: SharedKeyStore,
}
