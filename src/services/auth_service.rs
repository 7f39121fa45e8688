//! Domain service for authentication.
//!
//! Handles login, bearer token issuance and verification, and user creation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Role;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("User '{0}' already exists")]
    UsernameTaken(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// The authenticated caller, decoded from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Signed token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: Role,
    /// Issued at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Login result containing the bearer token and the caller's role.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub role: Role,
    pub username: String,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and issues a token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] if either field is empty
    /// - [`AuthError::InvalidCredentials`] for an unknown user or a wrong password
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Checks the signature and expiry of a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for anything that does not verify.
    fn verify_token(&self, token: &str) -> Result<Identity, AuthError>;

    /// Creates a user with the given role.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UsernameTaken`] if the name is in use.
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Identity, AuthError>;
}
