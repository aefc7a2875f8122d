//! Repository trait for user accounts.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered accounts.
///
/// The store assigns the account identifier and enforces email uniqueness.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryAccountRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on storage errors.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Finds an account by email.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Account))` if found
    /// - `Ok(None)` if not found
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;
}
