//! Typed errors for hashing and token operations.

use thiserror::Error;

use ems_core::error::{AppError, ErrorKind};

/// Failures of a [`CredentialHasher`](crate::CredentialHasher).
#[derive(Debug, Error)]
pub enum CredentialError {
    /// An empty password was given to `hash`.
    #[error("password must not be empty")]
    EmptyPassword,
    /// The stored hash is not a valid PHC string.
    #[error("stored credential hash is malformed: {0}")]
    MalformedHash(String),
    /// The Argon2 parameters are invalid.
    #[error("invalid argon2 parameters: {0}")]
    InvalidParams(String),
    /// Hashing or verification failed for another reason.
    #[error("credential hashing failed: {0}")]
    Internal(String),
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        // Details stay in the source chain; the message is generic.
        AppError::with_source(ErrorKind::Internal, "Credential processing failed", err)
    }
}

/// Failures of token issuance and verification.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing key, issuer or audience is missing.
    #[error("token signing is misconfigured: {0}")]
    SigningConfig(String),
    /// The token could not be encoded.
    #[error("failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    /// The token is past its `exp`.
    #[error("token has expired")]
    Expired,
    /// Bad signature, wrong issuer/audience or malformed token.
    #[error("invalid token: {0}")]
    Invalid(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SigningConfig(_) => {
                AppError::with_source(ErrorKind::Configuration, err.to_string(), err)
            }
            TokenError::Encode(_) => {
                AppError::with_source(ErrorKind::Internal, "Failed to issue token", err)
            }
            TokenError::Expired => AppError::authentication("Token has expired"),
            TokenError::Invalid(_) => AppError::authentication("Invalid token"),
        }
    }
}
