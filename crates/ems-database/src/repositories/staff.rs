//! PostgreSQL staff repository.

use async_trait::async_trait;
use sqlx::PgPool;

use ems_core::types::StaffId;
use ems_entity::staff::{NewStaff, StaffRecord};

use super::{RepositoryError, STAFF_EMAIL_CONSTRAINT, StaffRepository};

const STAFF_COLUMNS: &str = "staff_id, first_name, last_name, email, phone, active, \
                             store_id, manager_id, password_hash";

/// [`StaffRepository`] backed by the `staffs` table.
#[derive(Debug, Clone)]
pub struct PgStaffRepository {
    pool: PgPool,
}

impl PgStaffRepository {
    /// Create a new staff repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffRepository for PgStaffRepository {
    async fn create(&self, new_staff: NewStaff) -> Result<StaffRecord, RepositoryError> {
        sqlx::query_as::<_, StaffRecord>(&format!(
            "INSERT INTO staffs (first_name, last_name, email, phone, active, store_id, \
                                 manager_id, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {STAFF_COLUMNS}"
        ))
        .bind(&new_staff.first_name)
        .bind(&new_staff.last_name)
        .bind(&new_staff.email)
        .bind(&new_staff.phone)
        .bind(new_staff.active)
        .bind(new_staff.store_id)
        .bind(new_staff.manager_id)
        .bind(&new_staff.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(STAFF_EMAIL_CONSTRAINT) =>
            {
                RepositoryError::DuplicateEmail(new_staff.email.clone())
            }
            _ => RepositoryError::database("Failed to create staff", e),
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StaffRecord>, RepositoryError> {
        sqlx::query_as::<_, StaffRecord>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staffs WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("Failed to find staff by email", e))
    }

    async fn find_by_id(&self, id: StaffId) -> Result<Option<StaffRecord>, RepositoryError> {
        sqlx::query_as::<_, StaffRecord>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staffs WHERE staff_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("Failed to find staff by id", e))
    }

    async fn list(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        sqlx::query_as::<_, StaffRecord>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staffs ORDER BY staff_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("Failed to list staff", e))
    }

    async fn delete(&self, id: StaffId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM staffs WHERE staff_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("Failed to delete staff", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staffs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::database("Failed to count staff", e))?;
        Ok(total as u64)
    }
}
