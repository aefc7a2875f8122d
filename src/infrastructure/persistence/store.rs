//! Store handle owning the persistence backend and its lifecycle.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{AccountRepository, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::{
    InMemoryAccountRepository, InMemoryLinkRepository, PgAccountRepository, PgLinkRepository,
};

/// Connected persistence backend plus the repositories built on it.
///
/// Created once at startup with [`Store::connect`] and closed with
/// [`Store::disconnect`] at shutdown.
pub struct Store {
    links: Arc<dyn LinkRepository>,
    accounts: Arc<dyn AccountRepository>,
    backend: Backend,
}

enum Backend {
    Postgres(PgPool),
    Memory,
}

impl Store {
    /// Connects to the backend selected by `config` and applies migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or migrations fail.
    pub async fn connect(config: &Config) -> Result<Self> {
        match config.storage_backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is required for the postgres backend")?;

                let pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                    .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                    .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                    .connect(url)
                    .await
                    .context("Failed to connect to database")?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to apply migrations")?;

                Ok(Self::postgres(pool))
            }
        }
    }

    /// Wraps an existing pool.
    pub fn postgres(pool: PgPool) -> Self {
        let shared = Arc::new(pool.clone());

        Self {
            links: Arc::new(PgLinkRepository::new(shared.clone())),
            accounts: Arc::new(PgAccountRepository::new(shared)),
            backend: Backend::Postgres(pool),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            links: Arc::new(InMemoryLinkRepository::new()),
            accounts: Arc::new(InMemoryAccountRepository::new()),
            backend: Backend::Memory,
        }
    }

    pub fn links(&self) -> Arc<dyn LinkRepository> {
        self.links.clone()
    }

    pub fn accounts(&self) -> Arc<dyn AccountRepository> {
        self.accounts.clone()
    }

    /// Round-trips to the backend.
    pub async fn ping(&self) -> Result<(), AppError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Backend::Memory => Ok(()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Closes all backend connections. Further queries fail.
    pub async fn disconnect(&self) {
        if let Backend::Postgres(pool) = &self.backend {
            pool.close().await;
            tracing::info!("Database connections closed");
        }
    }
}
