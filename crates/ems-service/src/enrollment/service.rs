//! Enrollment orchestration.
//!
//! `validate → hash → persist → archive → publish`. Persistence is a single
//! attempt; archive and publish run under the retry policy. A failure after
//! persistence leaves the record in place and reports the persisted id.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use ems_auth::password::CredentialHasher;
use ems_core::error::{AppError, ErrorKind};
use ems_core::traits::events::EventPublisher;
use ems_core::types::StaffId;
use ems_database::repositories::{RepositoryError, StaffRepository};
use ems_entity::staff::{NewStaff, StaffRecord};
use ems_storage::archiver::{ArchiveLocation, StaffArchiver};

use super::request::EnrollStaffRequest;
use crate::retry::RetryPolicy;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Step of the pipeline at which an enrollment failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStage {
    Hashing,
    Persistence,
    Archival,
    Publication,
}

impl fmt::Display for EnrollmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hashing => write!(f, "hashing"),
            Self::Persistence => write!(f, "persistence"),
            Self::Archival => write!(f, "archival"),
            Self::Publication => write!(f, "publication"),
        }
    }
}

/// Enrollment failures.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// Missing or invalid fields; nothing was written.
    #[error("invalid fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },
    /// The email belongs to another staff member; nothing was written.
    #[error("email '{0}' is already in use")]
    DuplicateEmail(String),
    /// A pipeline step failed. `staff_id` is set once the record exists.
    #[error("enrollment failed during {stage}")]
    Failed {
        stage: EnrollmentStage,
        staff_id: Option<StaffId>,
        #[source]
        source: BoxError,
    },
}

impl EnrollmentError {
    fn failed(
        stage: EnrollmentStage,
        staff_id: Option<StaffId>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Failed {
            stage,
            staff_id,
            source: source.into(),
        }
    }

    /// The persisted id, if the record was written before the failure.
    pub fn staff_id(&self) -> Option<StaffId> {
        match self {
            Self::Failed { staff_id, .. } => *staff_id,
            _ => None,
        }
    }
}

impl From<EnrollmentError> for AppError {
    fn from(err: EnrollmentError) -> Self {
        match err {
            EnrollmentError::Validation { ref fields } => AppError::validation(format!(
                "Missing or invalid fields: {}",
                fields.join(", ")
            )),
            EnrollmentError::DuplicateEmail(_) => AppError::conflict("Email already in use"),
            EnrollmentError::Failed {
                stage: EnrollmentStage::Hashing | EnrollmentStage::Persistence,
                ..
            } => AppError::with_source(ErrorKind::Internal, "Staff enrollment failed", err),
            EnrollmentError::Failed {
                stage,
                staff_id: Some(id),
                ..
            } => AppError::with_source(
                ErrorKind::ExternalService,
                format!("Staff member {id} was created but {stage} failed"),
                err,
            ),
            EnrollmentError::Failed { .. } => {
                AppError::with_source(ErrorKind::ExternalService, "Staff enrollment failed", err)
            }
        }
    }
}

/// Outcome of a successful enrollment.
#[derive(Debug, Clone)]
pub struct EnrolledStaff {
    /// The persisted record.
    pub staff: StaffRecord,
    /// Where its snapshot was archived.
    pub archive: ArchiveLocation,
}

/// Orchestrates staff enrollment.
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    repo: Arc<dyn StaffRepository>,
    hasher: Arc<dyn CredentialHasher>,
    archiver: Arc<StaffArchiver>,
    publisher: Arc<dyn EventPublisher>,
    retry: RetryPolicy,
    topic: String,
}

impl EnrollmentService {
    /// Creates a new enrollment service.
    pub fn new(
        repo: Arc<dyn StaffRepository>,
        hasher: Arc<dyn CredentialHasher>,
        archiver: Arc<StaffArchiver>,
        publisher: Arc<dyn EventPublisher>,
        retry: RetryPolicy,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            hasher,
            archiver,
            publisher,
            retry,
            topic: topic.into(),
        }
    }

    /// Enroll a staff member.
    pub async fn enroll(&self, request: EnrollStaffRequest) -> Result<EnrolledStaff, EnrollmentError> {
        let valid = request.into_validated().map_err(|fields| {
            warn!(fields = ?fields, "Enrollment rejected");
            EnrollmentError::Validation { fields }
        })?;
        info!(email = %valid.email, "Enrollment validated");

        let hasher = Arc::clone(&self.hasher);
        let password = valid.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| EnrollmentError::failed(EnrollmentStage::Hashing, None, e))?
            .map_err(|e| {
                error!(error = %e, "Password hashing failed");
                EnrollmentError::failed(EnrollmentStage::Hashing, None, e)
            })?;

        let new_staff = NewStaff {
            first_name: valid.first_name,
            last_name: valid.last_name,
            email: valid.email,
            phone: valid.phone,
            active: valid.active,
            store_id: valid.store_id,
            manager_id: Some(valid.manager_id),
            password_hash,
        };

        let staff = self.repo.create(new_staff).await.map_err(|e| match e {
            RepositoryError::DuplicateEmail(email) => {
                warn!(email = %email, "Enrollment rejected: duplicate email");
                EnrollmentError::DuplicateEmail(email)
            }
            other => {
                error!(error = %other, "Failed to persist staff record");
                EnrollmentError::failed(EnrollmentStage::Persistence, None, other)
            }
        })?;
        let staff_id = staff.staff_id;
        info!(staff_id = %staff_id, "Staff record persisted");

        let archive = self
            .retry
            .run("archive staff record", || self.archiver.archive(&staff))
            .await
            .map_err(|e| {
                error!(
                    staff_id = %staff_id,
                    error = %e,
                    "Archiving failed; staff record remains persisted"
                );
                EnrollmentError::failed(EnrollmentStage::Archival, Some(staff_id), e)
            })?;
        info!(staff_id = %staff_id, key = %archive.key, "Staff record archived");

        let event = staff.to_created_event(&self.topic).map_err(|e| {
            error!(staff_id = %staff_id, error = %e, "Failed to build staff event");
            EnrollmentError::failed(EnrollmentStage::Publication, Some(staff_id), e)
        })?;
        self.retry
            .run("publish staff event", || self.publisher.publish(&event))
            .await
            .map_err(|e| {
                error!(
                    staff_id = %staff_id,
                    event_id = %event.id,
                    publisher = self.publisher.name(),
                    error = %e,
                    "Publishing failed; staff record remains persisted and archived"
                );
                EnrollmentError::failed(EnrollmentStage::Publication, Some(staff_id), e)
            })?;
        info!(staff_id = %staff_id, event_id = %event.id, "Staff event published");

        Ok(EnrolledStaff { staff, archive })
    }
}
