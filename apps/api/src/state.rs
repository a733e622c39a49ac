use std::sync::Arc;

use crate::matching::CareerMatcher;
use crate::store::CareerRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable catalogue store. Default: PgCareerRepository.
    pub careers: Arc<dyn CareerRepository>,
    pub matcher: Arc<CareerMatcher>,
}
