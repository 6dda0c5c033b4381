//! Handlers for short URL management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::url::{
    CreateAliasRequest, CreatedResponse, ShortenRequest, UrlResponse, UrlSummary,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all short URLs.
///
/// # Endpoint
///
/// `GET /v1`
///
/// # Response
///
/// ```json
/// [
///   { "id": "test1", "destination": "https://google.com" },
///   { "id": "test2", "destination": "https://yahoo.com" }
/// ]
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlSummary>>, AppError> {
    let urls = state.url_service.list().await?;

    Ok(Json(urls.into_iter().map(UrlSummary::from).collect()))
}

/// Creates a short URL under a caller-chosen alias.
///
/// # Endpoint
///
/// `POST /v1`
///
/// # Request Body
///
/// ```json
/// { "alias": "docs", "destination": "https://example.com/docs" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "docs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the alias is missing, empty or malformed, or the
/// destination is not an absolute URL. The service is not called in that case.
/// Returns 409 Conflict if the alias is already taken.
pub async fn create_alias_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAliasRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    payload.validate()?;

    let url = state
        .url_service
        .create_with_alias(payload.alias, payload.destination)
        .await?;

    Ok(Json(CreatedResponse { id: url.id }))
}

/// Creates a short URL whose id is derived from the destination.
///
/// # Endpoint
///
/// `POST /v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "destination": "https://example.com/a" }
/// ```
///
/// Shortening the same destination again returns the same id.
///
/// # Errors
///
/// Returns 400 Bad Request if the destination is not an absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    payload.validate()?;

    let url = state.url_service.create(payload.destination).await?;

    Ok(Json(CreatedResponse { id: url.id }))
}

/// Returns a single short URL.
///
/// # Endpoint
///
/// `GET /v1/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
pub async fn get_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let url = state.url_service.get_by_id(&id).await?;

    Ok(Json(url.into()))
}

/// Deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /v1/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
pub async fn delete_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
