//! Account entity for registered users.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// `password_digest` is whatever the configured
/// [`CredentialHasher`](crate::utils::password::CredentialHasher) produced;
/// the plaintext is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password_digest: String,
}
