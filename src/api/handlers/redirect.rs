//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::Redirect,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL to its destination.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Returns 307 Temporary Redirect so clients keep resolving through the
/// service and see deletions immediately.
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
/// Returns 500 if the stored destination cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.url_service.get_by_id(&id).await?;

    if HeaderValue::from_str(&url.destination).is_err() {
        return Err(AppError::internal(
            "Stored destination is not a valid redirect target",
            json!({ "id": id }),
        ));
    }

    debug!(id = %id, destination = %url.destination, "Redirecting");
    Ok(Redirect::temporary(&url.destination))
}
