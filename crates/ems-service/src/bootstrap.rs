//! Initial account seeding.
//!
//! Staff endpoints require a token and tokens require an existing account,
//! so an empty deployment is seeded from [`BootstrapConfig`] through the
//! regular enrollment pipeline.

use tracing::{info, warn};

use ems_core::config::bootstrap::BootstrapConfig;
use ems_core::error::AppError;

use crate::enrollment::{EnrollStaffRequest, EnrolledStaff, EnrollmentService};
use crate::staff::StaffService;

/// Enroll the configured initial account if the staff table is empty.
///
/// Returns `Ok(None)` when seeding is disabled or staff already exist.
pub async fn seed_initial_staff(
    enrollment: &EnrollmentService,
    staff: &StaffService,
    config: &BootstrapConfig,
) -> Result<Option<EnrolledStaff>, AppError> {
    if !config.is_enabled() {
        return Ok(None);
    }
    if config.password.is_empty() {
        return Err(AppError::configuration(
            "bootstrap.password must be set when bootstrap.email is",
        ));
    }

    let existing = staff.count().await?;
    if existing > 0 {
        info!(existing, "Staff table populated; skipping initial account");
        return Ok(None);
    }

    let request = EnrollStaffRequest {
        first_name: Some(config.first_name.clone()),
        last_name: Some(config.last_name.clone()),
        email: Some(config.email.clone()),
        phone: None,
        active: Some(1),
        store_id: Some(config.store_id),
        manager_id: Some(config.manager_id),
        password: Some(config.password.clone()),
    };

    let enrolled = enrollment.enroll(request).await.map_err(|e| {
        warn!(email = %config.email, error = %e, "Initial account enrollment failed");
        AppError::from(e)
    })?;
    info!(
        staff_id = %enrolled.staff.staff_id,
        email = %enrolled.staff.email,
        "Initial staff account enrolled"
    );
    Ok(Some(enrolled))
}
