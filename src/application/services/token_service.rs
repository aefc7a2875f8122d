//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a server-held secret. They are not
//! persisted: validity is decided by signature and `exp` alone, so a token
//! stays valid for its whole lifetime even if the account changes. Revocation
//! would need a denylist or short-lived tokens plus refresh.

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::domain::entities::Account;
use crate::error::AppError;
use crate::utils::clock::Clock;

/// Default token lifetime.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Longest accepted token lifetime (one year).
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier
    pub sub: String,
    pub email: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expires at, unix seconds
    pub exp: i64,
}

/// Issues and verifies signed, time-limited access tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if `secret` is empty or `ttl` is
    /// not positive or too large to add to the current time.
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::configuration("token signing secret is empty"));
        }
        if ttl <= Duration::zero() {
            return Err(AppError::configuration("token lifetime must be positive"));
        }
        if clock.now().checked_add_signed(ttl).is_none() {
            return Err(AppError::configuration("token lifetime is out of range"));
        }

        // Expiry is checked against the injected clock in `verify`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
            clock,
        })
    }

    /// Issues a token for `account`, valid for the configured lifetime.
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        let now = self.clock.now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            tracing::error!(ttl = %self.ttl, "token expiry overflows");
            AppError::internal("Failed to issue token", Value::Null)
        })?;

        let claims = Claims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to encode access token");
            AppError::internal("Failed to issue token", Value::Null)
        })
    }

    /// Verifies signature and expiry and returns the embedded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, signed
    /// with another key or algorithm, or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid token" }))
        })?;

        if data.claims.exp <= self.clock.now().timestamp() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Token expired" }),
            ));
        }

        Ok(data.claims)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
