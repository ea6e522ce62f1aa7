//! Staff repository: the trait consumed by services and its implementations.

pub mod memory;
pub mod staff;

use async_trait::async_trait;
use thiserror::Error;

use ems_core::error::{AppError, ErrorKind};
use ems_core::types::StaffId;
use ems_entity::staff::{NewStaff, StaffRecord};

pub use memory::InMemoryStaffRepository;
pub use staff::PgStaffRepository;

/// Name of the unique index guarding staff emails.
pub const STAFF_EMAIL_CONSTRAINT: &str = "staffs_email_key";

/// Errors raised by a [`StaffRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Another staff record already uses this email (case-insensitive).
    #[error("email '{0}' is already in use")]
    DuplicateEmail(String),
    /// The backing store failed.
    #[error("{context}: {source}")]
    Database {
        /// What the repository was doing.
        context: &'static str,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
}

impl RepositoryError {
    pub(crate) fn database(context: &'static str, source: sqlx::Error) -> Self {
        Self::Database { context, source }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateEmail(_) => AppError::conflict("Email already in use"),
            RepositoryError::Database { context, .. } => {
                AppError::with_source(ErrorKind::Database, context, err)
            }
        }
    }
}

/// Durable store of staff records keyed by id, with email as a logical
/// unique key.
///
/// Single create and read operations are atomic; nothing else is assumed.
#[async_trait]
pub trait StaffRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a record and return it with its assigned id.
    async fn create(&self, new_staff: NewStaff) -> Result<StaffRecord, RepositoryError>;

    /// Find a record by email (case-insensitive). Absence is `Ok(None)`.
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffRecord>, RepositoryError>;

    /// Find a record by id.
    async fn find_by_id(&self, id: StaffId) -> Result<Option<StaffRecord>, RepositoryError>;

    /// All records ordered by id.
    async fn list(&self) -> Result<Vec<StaffRecord>, RepositoryError>;

    /// Delete a record. Returns whether a record was removed.
    async fn delete(&self, id: StaffId) -> Result<bool, RepositoryError>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
