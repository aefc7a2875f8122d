//! Account registration and login.

use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::TokenService;
use crate::domain::entities::NewAccount;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use crate::utils::password::CredentialHasher;

/// Service for creating accounts and exchanging credentials for tokens.
pub struct AccountService<A, H>
where
    A: AccountRepository + ?Sized,
    H: CredentialHasher + ?Sized + 'static,
{
    repository: Arc<A>,
    hasher: Arc<H>,
    token_service: Arc<TokenService>,
}

impl<A, H> AccountService<A, H>
where
    A: AccountRepository + ?Sized,
    H: CredentialHasher + ?Sized + 'static,
{
    pub fn new(repository: Arc<A>, hasher: Arc<H>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            hasher,
            token_service,
        }
    }

    /// Registers a new account and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the passwords differ; nothing is
    /// written in that case.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Uuid, AppError> {
        if password != confirm_password {
            return Err(AppError::bad_request(
                "password not equals confirm password",
                Value::Null,
            ));
        }

        let password_digest = self.hash(password.to_string()).await?;

        let account = self
            .repository
            .create(NewAccount {
                email: email.to_string(),
                password_digest,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Email already registered",
                    json!({ "email": email }),
                ),
                other => other,
            })?;

        tracing::info!(id = %account.id, "account created");

        Ok(account.id)
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with `failed to login` when the
    /// account lookup fails for any reason, and `wrong password` when the
    /// password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let account = match self.repository.find_by_email(email).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                tracing::warn!("login for unknown email");
                return Err(AppError::unauthorized("failed to login", Value::Null));
            }
            Err(e) => {
                tracing::error!(error = %e, "account lookup failed");
                return Err(AppError::unauthorized("failed to login", Value::Null));
            }
        };

        let matches = self
            .verify(password.to_string(), account.password_digest.clone())
            .await?;

        if !matches {
            tracing::warn!(id = %account.id, "wrong password");
            return Err(AppError::unauthorized("wrong password", Value::Null));
        }

        let token = self.token_service.issue(&account)?;

        tracing::info!(id = %account.id, "login successful");

        Ok(token)
    }

    async fn hash(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(join_error)?
    }

    async fn verify(&self, password: String, digest: String) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(join_error)?
    }
}

fn join_error(e: tokio::task::JoinError) -> AppError {
    tracing::error!(error = %e, "password task failed");
    AppError::internal("Failed to process password", Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Account;
    use crate::domain::repositories::MockAccountRepository;
    use crate::utils::clock::SystemClock;
    use crate::utils::password::Argon2Hasher;
    use chrono::{Duration, Utc};

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret", Duration::hours(24), Arc::new(SystemClock)).unwrap())
    }

    fn service(repo: MockAccountRepository) -> AccountService<MockAccountRepository, Argon2Hasher> {
        AccountService::new(Arc::new(repo), Arc::new(Argon2Hasher::new()), token_service())
    }

    fn stored_account(email: &str, password: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_digest: Argon2Hasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success_stores_digest() {
        let mut mock_repo = MockAccountRepository::new();
        let id = Uuid::new_v4();

        mock_repo
            .expect_create()
            .withf(|new_account| {
                new_account.email == "user@example.com"
                    && new_account.password_digest != "pw"
                    && new_account.password_digest.starts_with("$argon2id$")
            })
            .times(1)
            .returning(move |new_account| {
                Ok(Account {
                    id,
                    email: new_account.email,
                    password_digest: new_account.password_digest,
                    created_at: Utc::now(),
                })
            });

        let result = service(mock_repo)
            .register("user@example.com", "pw", "pw")
            .await;

        assert_eq!(result.unwrap(), id);
    }

    #[tokio::test]
    async fn test_register_password_mismatch_no_store_call() {
        let mut mock_repo = MockAccountRepository::new();
        mock_repo.expect_create().times(0);

        let result = service(mock_repo)
            .register("user@example.com", "pw1", "pw2")
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", Value::Null)));

        let result = service(mock_repo)
            .register("user@example.com", "pw", "pw")
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_login_success_returns_verifiable_token() {
        let mut mock_repo = MockAccountRepository::new();
        let account = stored_account("user@example.com", "secret-pw");

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "user@example.com")
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let tokens = token_service();
        let service = AccountService::new(
            Arc::new(mock_repo),
            Arc::new(Argon2Hasher::new()),
            tokens.clone(),
        );

        let token = service
            .login("user@example.com", "secret-pw")
            .await
            .unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_repo = MockAccountRepository::new();
        let account = stored_account("user@example.com", "secret-pw");

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let result = service(mock_repo)
            .login("user@example.com", "secret-pwx")
            .await;

        match result {
            Err(AppError::Unauthorized { message, .. }) => assert_eq!(message, "wrong password"),
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).login("nobody@example.com", "pw").await;

        match result {
            Err(AppError::Unauthorized { message, .. }) => assert_eq!(message, "failed to login"),
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_storage_error_is_not_distinguished() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(AppError::internal("Storage error", Value::Null)));

        let result = service(mock_repo).login("user@example.com", "pw").await;

        match result {
            Err(AppError::Unauthorized { message, .. }) => assert_eq!(message, "failed to login"),
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }
}
