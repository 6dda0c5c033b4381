//! Versioned API route configuration.

use crate::api::handlers::{
    create_alias_handler, delete_url_handler, get_url_handler, list_urls_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL management routes, nested under `/v1`.
///
/// # Endpoints
///
/// - `GET    /`          - List short URLs
/// - `POST   /`          - Create a short URL under an alias
/// - `POST   /shorten`   - Create a short URL with a derived id
/// - `GET    /{id}`      - Fetch a short URL
/// - `DELETE /{id}`      - Delete a short URL
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_urls_handler).post(create_alias_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{id}", get(get_url_handler).delete(delete_url_handler))
}
