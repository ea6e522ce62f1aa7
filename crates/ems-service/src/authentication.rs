//! Login: lookup, existence check, password verification, token issuance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

use ems_auth::jwt::TokenIssuer;
use ems_auth::password::CredentialHasher;
use ems_core::error::{AppError, ErrorKind};
use ems_database::repositories::StaffRepository;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message shared by unknown-email and wrong-password responses.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password";

/// Login failures.
#[derive(Debug, Error)]
pub enum LoginError {
    /// No staff member has this email.
    #[error("no staff member with this email")]
    NotFound,
    /// The password does not match the stored hash.
    #[error("password mismatch")]
    InvalidCredentials,
    /// Lookup, verification or token issuance failed.
    #[error("login failed: {0}")]
    Internal(#[source] BoxError),
}

impl From<LoginError> for AppError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::NotFound => AppError::not_found(INVALID_LOGIN_MESSAGE),
            LoginError::InvalidCredentials => AppError::authentication(INVALID_LOGIN_MESSAGE),
            LoginError::Internal(_) => {
                AppError::with_source(ErrorKind::Internal, "Login failed", err)
            }
        }
    }
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed bearer token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// Email the token was issued for, as stored.
    pub email: String,
}

/// Authenticates staff and issues tokens.
#[derive(Debug, Clone)]
pub struct AuthenticationService {
    repo: Arc<dyn StaffRepository>,
    hasher: Arc<dyn CredentialHasher>,
    issuer: Arc<TokenIssuer>,
}

impl AuthenticationService {
    /// Creates a new authentication service.
    pub fn new(
        repo: Arc<dyn StaffRepository>,
        hasher: Arc<dyn CredentialHasher>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            repo,
            hasher,
            issuer,
        }
    }

    /// Verify `password` for `email` and issue a token.
    ///
    /// Existence is checked before any verification work is done.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        let staff = self
            .repo
            .find_by_email(email.trim())
            .await
            .map_err(|e| {
                error!(error = %e, "Staff lookup failed during login");
                LoginError::Internal(e.into())
            })?
            .ok_or_else(|| {
                warn!(email = %email, "Login for unknown email");
                LoginError::NotFound
            })?;

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = staff.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| LoginError::Internal(e.into()))?
            .map_err(|e| {
                error!(staff_id = %staff.staff_id, error = %e, "Stored credential unusable");
                LoginError::Internal(e.into())
            })?;

        if !matches {
            warn!(staff_id = %staff.staff_id, "Login with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let issued = self.issuer.issue_default(&staff.email).map_err(|e| {
            error!(error = %e, "Token issuance failed");
            LoginError::Internal(e.into())
        })?;

        info!(staff_id = %staff.staff_id, "Staff logged in");
        Ok(LoginOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
            email: staff.email,
        })
    }
}
