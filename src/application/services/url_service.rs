//! Short URL creation, lookup and removal service.

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, SubsecRound, Utc};
use regex::Regex;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::id_generator::derive_id;

/// Aliases that would shadow a fixed route and never be reachable.
const RESERVED_ALIASES: &[&str] = &["v1", "health", "shorten"];

/// Longest alias accepted, in bytes.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases are used as a single URL path segment.
pub static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Single orchestration point for all mapping operations.
///
/// Holds nothing but its repository, so one instance is shared by every
/// request. Each operation issues its repository calls directly: no caching,
/// no retries. Dropping a returned future drops the in-flight repository call.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL whose id is derived from the destination.
    ///
    /// Shortening a destination that is already stored under its derived id
    /// returns the stored record; its `created` timestamp is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the destination is empty.
    /// Returns [`AppError::Conflict`] if the derived id is held by a record
    /// with a different destination.
    /// Returns [`AppError::Repository`] if the write fails.
    pub async fn create(&self, destination: String) -> Result<Url, AppError> {
        validate_destination(&destination)?;

        let id = derive_id(&destination);
        let url = Url::new(id, destination, now());

        match self.repository.put(url.clone()).await {
            Ok(()) => {
                info!(id = %url.id, "Short URL created");
                Ok(url)
            }
            Err(AppError::Conflict { message, details }) => {
                match self.repository.get(&url.id).await? {
                    Some(existing) if existing.destination == url.destination => {
                        debug!(id = %existing.id, "Destination already shortened");
                        Ok(existing)
                    }
                    _ => Err(AppError::Conflict { message, details }),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Creates a short URL under a caller-chosen alias.
    ///
    /// The alias is validated before any storage call is made.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alias is empty, malformed or
    /// reserved, or the destination is empty.
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Repository`] if the write fails.
    pub async fn create_with_alias(
        &self,
        alias: String,
        destination: String,
    ) -> Result<Url, AppError> {
        validate_alias(&alias)?;
        validate_destination(&destination)?;

        let url = Url::new(alias, destination, now());
        self.repository.put(url.clone()).await?;

        info!(id = %url.id, "Aliased URL created");
        Ok(url)
    }

    /// Retrieves a short URL by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that id.
    /// Returns [`AppError::Repository`] on lookup failure.
    pub async fn get_by_id(&self, id: &str) -> Result<Url, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))
    }

    /// Lists every stored short URL. Order is up to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] on failure.
    pub async fn list(&self) -> Result<Vec<Url>, AppError> {
        self.repository.list().await
    }

    /// Deletes a short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that id.
    /// Repository failures are returned with `failed to delete <id>` context.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| e.context(format!("failed to delete {id}")))?;

        if !deleted {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "id": id }),
            ));
        }

        info!(id, "Short URL deleted");
        Ok(())
    }

    /// Reports whether the storage backend is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

/// Creation timestamp at the microsecond precision PostgreSQL stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Checks a caller-supplied alias.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the alias is empty, longer than
/// [`MAX_ALIAS_LENGTH`], not a single path-safe segment, or reserved.
fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::bad_request(
            "Alias must not be empty",
            json!({ "field": "alias" }),
        ));
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Alias must be at most {MAX_ALIAS_LENGTH} characters"),
            json!({ "field": "alias", "length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

fn validate_destination(destination: &str) -> Result<(), AppError> {
    if destination.is_empty() {
        return Err(AppError::bad_request(
            "Destination must not be empty",
            json!({ "field": "destination" }),
        ));
    }

    Ok(())
}
