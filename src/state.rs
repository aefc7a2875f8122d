//! Shared application state injected into handlers and middleware.

use anyhow::Result;
use std::sync::Arc;

use crate::application::services::{AccountService, LinkService, TokenService};
use crate::config::Config;
use crate::domain::repositories::{AccountRepository, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::Store;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::password::{Argon2Hasher, CredentialHasher};

pub type DynLinkService = LinkService<dyn LinkRepository>;
pub type DynAccountService = AccountService<dyn AccountRepository, dyn CredentialHasher>;

/// Immutable service graph, cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    pub account_service: Arc<DynAccountService>,
    pub token_service: Arc<TokenService>,
    pub store: Arc<Store>,
}

impl AppState {
    /// Wires services on top of `store` using the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the token settings are invalid.
    pub fn from_store(store: Arc<Store>, config: &Config) -> Result<Self> {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Same as [`AppState::from_store`] with an explicit time source.
    pub fn with_clock(store: Arc<Store>, config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let ttl = chrono::Duration::try_hours(config.token_ttl_hours)
            .ok_or_else(|| AppError::configuration("token lifetime is out of range"))?;
        let token_service = Arc::new(TokenService::new(
            &config.token_signing_secret,
            ttl,
            clock,
        )?);

        let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2Hasher::new());

        let link_service = Arc::new(LinkService::new(store.links(), config.alias_length));
        let account_service = Arc::new(AccountService::new(
            store.accounts(),
            hasher,
            token_service.clone(),
        ));

        Ok(Self {
            link_service,
            account_service,
            token_service,
            store,
        })
    }
}
