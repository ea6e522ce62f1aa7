//! HS256 bearer tokens: claims, issuance and verification.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use issuer::{IssuedToken, TokenIssuer};
pub use verifier::TokenVerifier;
