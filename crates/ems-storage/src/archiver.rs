//! Staff record archiving.
//!
//! Each call writes a full JSON snapshot of the record (password hash
//! included) under a freshly generated key. Archiving the same record twice
//! produces two objects; retrying is the caller's business.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use ems_core::error::{AppError, ErrorKind};
use ems_core::traits::storage::ObjectStore;
use ems_entity::staff::StaffRecord;

/// Object key prefix of staff snapshots.
pub const ARCHIVE_KEY_PREFIX: &str = "ems.Staff.";

/// Where a snapshot was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveLocation {
    /// Container (bucket / top-level directory).
    pub container: String,
    /// Object key within the container.
    pub key: String,
}

impl ArchiveLocation {
    /// `<container>/<key>` as passed to the object store.
    pub fn path(&self) -> String {
        format!("{}/{}", self.container, self.key)
    }
}

/// Archive failures.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The record could not be serialized.
    #[error("failed to serialize staff record: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The object store rejected the write.
    #[error("failed to write archive object: {0}")]
    Write(#[source] AppError),
}

impl From<ArchiveError> for AppError {
    fn from(err: ArchiveError) -> Self {
        AppError::with_source(ErrorKind::ExternalService, "Staff archive failed", err)
    }
}

/// Writes staff snapshots to the configured container.
#[derive(Debug, Clone)]
pub struct StaffArchiver {
    store: Arc<dyn ObjectStore>,
    container: String,
}

impl StaffArchiver {
    /// Create an archiver writing into `container`.
    pub fn new(store: Arc<dyn ObjectStore>, container: impl Into<String>) -> Self {
        Self {
            store,
            container: container.into(),
        }
    }

    /// Serialize `record` and write it under `ems.Staff.<uuid>.json`.
    pub async fn archive(&self, record: &StaffRecord) -> Result<ArchiveLocation, ArchiveError> {
        let body = serde_json::to_vec(record)?;
        let location = ArchiveLocation {
            container: self.container.clone(),
            key: format!("{ARCHIVE_KEY_PREFIX}{}.json", Uuid::new_v4()),
        };

        self.store
            .write(&location.path(), Bytes::from(body))
            .await
            .map_err(ArchiveError::Write)?;

        debug!(
            staff_id = %record.staff_id,
            key = %location.key,
            "Archived staff snapshot"
        );
        Ok(location)
    }
}
