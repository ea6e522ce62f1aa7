//! Password hashing.

pub mod hasher;

pub use hasher::Argon2CredentialHasher;

use crate::error::CredentialError;

/// One-way credential hashing.
///
/// Implementations are CPU-bound and synchronous; async callers should run
/// them on a blocking thread.
pub trait CredentialHasher: Send + Sync + std::fmt::Debug + 'static {
    /// Hash a non-empty password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check `password` against a stored hash.
    ///
    /// `Ok(false)` on mismatch; `Err(MalformedHash)` if `hash` cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}
