//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and credential hashing configuration.
///
/// `jwt_secret`, `jwt_issuer` and `jwt_audience` have no defaults: the token
/// issuer refuses to start with any of them empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// `iss` claim written into and required on every token.
    #[serde(default)]
    pub jwt_issuer: String,
    /// `aud` claim written into and required on every token.
    #[serde(default)]
    pub jwt_audience: String,
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_expire_minutes")]
    pub jwt_expire_minutes: u64,
    /// Clock skew tolerated when validating `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub jwt_leeway_seconds: u64,
    /// Argon2 cost parameters.
    #[serde(default)]
    pub argon2: Argon2Config,
}

/// Argon2id cost parameters applied to every new hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_expire_minutes() -> u64 {
    60
}

fn default_leeway() -> u64 {
    5
}

// argon2 crate defaults (m=19 MiB, t=2, p=1).
fn default_memory_kib() -> u32 {
    19_456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
