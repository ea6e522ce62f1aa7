//! # ems-auth
//!
//! Credential hashing and bearer tokens for staff accounts.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing behind the [`CredentialHasher`] trait
//! - `jwt`: HS256 token issuance and verification

pub mod error;
pub mod jwt;
pub mod password;

pub use error::{CredentialError, TokenError};
pub use jwt::{Claims, IssuedToken, TokenIssuer, TokenVerifier};
pub use password::{Argon2CredentialHasher, CredentialHasher};
