//! Staff lookups and removal.

use std::sync::Arc;

use tracing::info;

use ems_core::error::AppError;
use ems_core::types::StaffId;
use ems_database::repositories::StaffRepository;
use ems_entity::staff::StaffRecord;

use crate::context::RequestContext;

/// Read and delete operations on staff records.
#[derive(Debug, Clone)]
pub struct StaffService {
    repo: Arc<dyn StaffRepository>,
}

impl StaffService {
    /// Creates a new staff service.
    pub fn new(repo: Arc<dyn StaffRepository>) -> Self {
        Self { repo }
    }

    /// All staff ordered by id.
    pub async fn list(&self) -> Result<Vec<StaffRecord>, AppError> {
        Ok(self.repo.list().await?)
    }

    /// One staff member.
    pub async fn get(&self, id: StaffId) -> Result<StaffRecord, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Staff member not found."))
    }

    /// The manager of staff member `id`.
    pub async fn manager_of(&self, id: StaffId) -> Result<StaffRecord, AppError> {
        let staff = self.get(id).await?;
        let manager_id = staff
            .manager_id
            .ok_or_else(|| AppError::not_found("This staff member does not have a manager."))?;

        self.repo
            .find_by_id(manager_id)
            .await?
            .ok_or_else(|| AppError::not_found("Manager details not found."))
    }

    /// Remove staff member `id`.
    pub async fn delete(&self, ctx: &RequestContext, id: StaffId) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Staff member not found."));
        }
        info!(staff_id = %id, actor = %ctx.email, "Staff member deleted");
        Ok(())
    }

    /// Number of staff records.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.repo.count().await?)
    }
}
