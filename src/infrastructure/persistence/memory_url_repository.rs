//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local URL storage.
///
/// Records live for the lifetime of the process. Writes are serialized by a
/// single lock, which makes the duplicate-id check and the insert atomic.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: RwLock<HashMap<String, Url>>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn put(&self, url: Url) -> Result<(), AppError> {
        let mut urls = self.urls.write().await;

        if urls.contains_key(&url.id) {
            return Err(AppError::conflict(
                "Identifier already exists",
                json!({ "id": url.id }),
            ));
        }

        urls.insert(url.id.clone(), url);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Url>, AppError> {
        Ok(self.urls.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Url>, AppError> {
        let mut urls: Vec<Url> = self.urls.read().await.values().cloned().collect();
        urls.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        Ok(urls)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.urls.write().await.remove(id).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
