//! Core type definitions used across the EMS workspace.

pub mod id;

pub use id::*;
