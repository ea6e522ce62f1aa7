//! # ems-database
//!
//! PostgreSQL connection management, the embedded migration runner, and the
//! staff repository (PostgreSQL and in-memory implementations).

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{
    InMemoryStaffRepository, PgStaffRepository, RepositoryError, StaffRepository,
};
