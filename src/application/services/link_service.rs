//! Link creation, resolution and removal.

use serde_json::json;
use std::sync::Arc;
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};

/// Generated-alias insert attempts before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Aliases shadowed by fixed routes; `GET /{alias}` never reaches them.
pub const RESERVED_ALIASES: &[&str] = &["health", "login", "register", "url"];

fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Service orchestrating the alias lifecycle against a [`LinkRepository`].
///
/// A link is either present or absent: `save` creates it, `remove` deletes
/// it and `resolve` is a pure read.
pub struct LinkService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    alias_length: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service generating aliases of `alias_length` characters.
    pub fn new(repository: Arc<L>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length,
        }
    }

    /// Creates a link service with the default alias length.
    pub fn with_default_length(repository: Arc<L>) -> Self {
        Self::new(repository, DEFAULT_ALIAS_LENGTH)
    }

    /// Stores a link for `target_url`.
    ///
    /// An empty or missing `alias` is replaced by a generated one. A supplied
    /// alias is used verbatim. The returned [`Link`] carries the alias that was
    /// actually stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `target_url` is not an absolute URL
    /// or contains control characters or surrounding whitespace, which could
    /// not be sent back in a `Location` header.
    /// Returns [`AppError::Conflict`] if a supplied alias is already taken or
    /// is one of [`RESERVED_ALIASES`].
    /// Returns [`AppError::Internal`] if no free alias was found after
    /// repeated generation.
    pub async fn save(&self, target_url: &str, alias: Option<&str>) -> Result<Link, AppError> {
        Url::parse(target_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        // The parser silently drops tabs and newlines; the stored string must
        // stay a valid header value.
        if target_url.chars().any(char::is_control) || target_url.trim() != target_url {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "reason": "URL contains whitespace or control characters" }),
            ));
        }

        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => self.save_with_alias(target_url, alias).await,
            None => self.save_with_generated_alias(target_url).await,
        }
    }

    async fn save_with_alias(&self, target_url: &str, alias: &str) -> Result<Link, AppError> {
        if is_reserved(alias) {
            return Err(AppError::conflict(
                "Alias is reserved",
                json!({ "alias": alias }),
            ));
        }

        let new_link = NewLink {
            alias: alias.to_string(),
            target_url: target_url.to_string(),
        };

        match self.repository.create(new_link).await {
            Ok(link) => {
                tracing::info!(id = link.id, alias = %link.alias, "link created");
                Ok(link)
            }
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Alias already exists",
                json!({ "alias": alias }),
            )),
            Err(e) => Err(e),
        }
    }

    async fn save_with_generated_alias(&self, target_url: &str) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let alias = generate_alias(self.alias_length);
            if is_reserved(&alias) {
                continue;
            }

            let new_link = NewLink {
                alias,
                target_url: target_url.to_string(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(id = link.id, alias = %link.alias, "link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "generated alias collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .map(|link| link.target_url)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "alias": alias })))
    }

    /// Deletes the link stored under `alias`.
    ///
    /// Removing an alias that does not exist is not an error.
    pub async fn remove(&self, alias: &str) -> Result<(), AppError> {
        let removed = self.repository.delete_by_alias(alias).await?;

        if removed {
            tracing::info!(alias, "link removed");
        } else {
            tracing::debug!(alias, "remove on absent alias");
        }

        Ok(())
    }
}

impl<L: LinkRepository + ?Sized> std::fmt::Debug for LinkService<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkService")
            .field("alias_length", &self.alias_length)
            .finish_non_exhaustive()
    }
}
