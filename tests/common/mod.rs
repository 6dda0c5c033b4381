#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use smallurl::AppError;
use smallurl::api::handlers::{health_handler, redirect_handler};
use smallurl::api::routes::v1_routes;
use smallurl::domain::entities::Url;
use smallurl::domain::repositories::UrlRepository;
use smallurl::infrastructure::persistence::InMemoryUrlRepository;
use smallurl::state::AppState;

/// Storage backend whose every call fails, for exercising error paths.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn put(&self, _url: Url) -> Result<(), AppError> {
        Err(AppError::repository("storage offline", json!({})))
    }

    async fn get(&self, _id: &str) -> Result<Option<Url>, AppError> {
        Err(AppError::repository("storage offline", json!({})))
    }

    async fn list(&self) -> Result<Vec<Url>, AppError> {
        Err(AppError::repository("storage offline", json!({})))
    }

    async fn delete(&self, _id: &str) -> Result<bool, AppError> {
        Err(AppError::repository("storage offline", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryUrlRepository::new()))
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository))
}

/// Build a test server with every route except middleware.
///
/// The rate limiter keys on the peer socket address, which the in-process
/// transport does not provide, so it is left out here.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .nest("/v1", v1_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn create_test_alias(state: &AppState, alias: &str, destination: &str) -> Url {
    state
        .url_service
        .create_with_alias(alias.to_string(), destination.to_string())
        .await
        .unwrap()
}
