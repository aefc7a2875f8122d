//! PostgreSQL implementation of account repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// PostgreSQL repository for accounts.
///
/// Ids come from `gen_random_uuid()`; email uniqueness is enforced by the
/// `accounts_email_key` constraint.
pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_digest: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            email: row.email,
            password_digest: row.password_digest,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (email, password_digest)
            VALUES ($1, $2)
            RETURNING id, email, password_digest, created_at
            "#,
        )
        .bind(&new_account.email)
        .bind(&new_account.password_digest)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_digest, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Account::from))
    }
}
