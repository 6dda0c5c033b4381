//! Repository trait for short URL data access.

use crate::domain::entities::Url;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for [`Url`] records.
///
/// Uniqueness of `id` is enforced here, not by callers: `put` must reject a
/// record whose id is already stored instead of overwriting it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local storage
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same id exists.
    /// Returns [`AppError::Repository`] on storage errors.
    async fn put(&self, url: Url) -> Result<(), AppError>;

    /// Finds a record by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Url))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] on storage errors.
    async fn get(&self, id: &str) -> Result<Option<Url>, AppError>;

    /// Returns every stored record in backend-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] on storage errors.
    async fn list(&self) -> Result<Vec<Url>, AppError>;

    /// Removes a record.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] on storage errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
