//! # ems-entity
//!
//! Domain entity models for the staff management service. Every struct in
//! this crate represents a database table row or the payload used to create
//! one. Row entities derive `sqlx::FromRow`.

pub mod staff;
