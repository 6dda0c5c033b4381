//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// State shared by all request handlers.
///
/// The storage backend is chosen at startup, so the service is held behind
/// a trait object.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
}

impl AppState {
    /// Builds the state around a storage backend.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
        }
    }
}
