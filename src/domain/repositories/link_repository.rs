//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError>;

    /// Deletes a link by its alias.
    ///
    /// Returns `Ok(true)` if a record was removed and `Ok(false)` if there was
    /// nothing to remove. Both are success.
    async fn delete_by_alias(&self, alias: &str) -> Result<bool, AppError>;
}
