//! # ems-core
//!
//! Core crate for the Bike Store staff management service. Contains the
//! configuration schema, typed identifiers, the domain event envelope,
//! the storage and event-publishing traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other EMS crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
