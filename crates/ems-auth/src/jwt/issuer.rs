//! Token issuance.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::debug;

use ems_core::config::auth::AuthConfig;

use super::claims::Claims;
use crate::error::TokenError;

/// A freshly signed token and the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS.
    pub token: String,
    /// `exp` as a timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Signs HS256 tokens for authenticated staff.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    default_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates an issuer from auth configuration.
    ///
    /// Fails when the secret, issuer or audience is empty, or when
    /// `jwt_expire_minutes` is zero or too large to yield a valid `exp`.
    pub fn new(config: &AuthConfig) -> Result<Self, TokenError> {
        ensure_signing_config(config)?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            default_ttl: token_lifetime(config.jwt_expire_minutes)?,
        })
    }

    /// Issue a token valid for the configured lifetime.
    pub fn issue_default(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.issue(subject, self.default_ttl)
    }

    /// Issue a token valid for `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token as if the current instant were `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| TokenError::SigningConfig(format!("token lifetime {ttl} overflows")))?;
        let claims = Claims {
            sub: subject.to_string(),
            email: subject.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)?;

        debug!(subject = %subject, exp = claims.exp, "Issued staff token");

        Ok(IssuedToken {
            token,
            // Truncated to whole seconds so it matches the `exp` claim.
            expires_at: claims.expires_at(),
        })
    }
}

fn token_lifetime(minutes: u64) -> Result<Duration, TokenError> {
    let out_of_range = || {
        TokenError::SigningConfig(format!("jwt_expire_minutes {minutes} is out of range"))
    };

    if minutes == 0 {
        return Err(TokenError::SigningConfig(
            "jwt_expire_minutes must be positive".to_string(),
        ));
    }
    let ttl = i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .ok_or_else(out_of_range)?;
    // `exp` must be representable for tokens issued now.
    Utc::now().checked_add_signed(ttl).ok_or_else(out_of_range)?;
    Ok(ttl)
}

pub(crate) fn ensure_signing_config(config: &AuthConfig) -> Result<(), TokenError> {
    let missing: Vec<&str> = [
        ("jwt_secret", config.jwt_secret.as_str()),
        ("jwt_issuer", config.jwt_issuer.as_str()),
        ("jwt_audience", config.jwt_audience.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TokenError::SigningConfig(format!(
            "missing {}",
            missing.join(", ")
        )))
    }
}
