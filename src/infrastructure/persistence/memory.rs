//! Process-local repository implementations.
//!
//! Used by `STORAGE_BACKEND=memory` for local runs and by the HTTP tests.
//! Data lives only as long as the process.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Account, Link, NewAccount, NewLink};
use crate::domain::repositories::{AccountRepository, LinkRepository};
use crate::error::AppError;

/// Links keyed by alias.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.alias) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_alias_key" }),
            ));
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            new_link.alias,
            new_link.target_url,
            Utc::now(),
        );
        links.insert(link.alias.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(alias).cloned())
    }

    async fn delete_by_alias(&self, alias: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(alias).is_some())
    }
}

/// Accounts keyed by email.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&new_account.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "accounts_email_key" }),
            ));
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: new_account.email,
            password_digest: new_account.password_digest,
            created_at: Utc::now(),
        };
        accounts.insert(account.email.clone(), account.clone());

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }
}
