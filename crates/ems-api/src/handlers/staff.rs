//! Staff handlers: enroll, list, get, manager lookup, delete.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

use ems_service::EnrollStaffRequest;

use crate::dto::response::{ApiResponse, EnrollResponse, MessageResponse, StaffResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthStaff, parse_staff_id};
use crate::state::AppState;

/// POST /api/staffs/add
pub async fn add_staff(
    State(state): State<AppState>,
    auth: AuthStaff,
    ApiJson(req): ApiJson<EnrollStaffRequest>,
) -> Result<Json<ApiResponse<EnrollResponse>>, ApiError> {
    info!(actor = %auth.email, "Staff enrollment requested");

    let enrolled = state.enrollment_service.enroll(req).await?;

    Ok(Json(ApiResponse::ok(enrolled.into())))
}

/// GET /api/staffs
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StaffResponse>>>, ApiError> {
    let staff = state.staff_service.list().await?;

    Ok(Json(ApiResponse::ok(
        staff.into_iter().map(StaffResponse::from).collect(),
    )))
}

/// GET /api/staffs/{id}
pub async fn get_staff(
    State(state): State<AppState>,
    _auth: AuthStaff,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StaffResponse>>, ApiError> {
    let id = parse_staff_id(&id)?;
    let staff = state.staff_service.get(id).await?;

    Ok(Json(ApiResponse::ok(staff.into())))
}

/// GET /api/staffs/managerdetails/{id}
pub async fn manager_details(
    State(state): State<AppState>,
    _auth: AuthStaff,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StaffResponse>>, ApiError> {
    let id = parse_staff_id(&id)?;
    let manager = state.staff_service.manager_of(id).await?;

    Ok(Json(ApiResponse::ok(manager.into())))
}

/// DELETE /api/staffs/{id}
pub async fn delete_staff(
    State(state): State<AppState>,
    auth: AuthStaff,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = parse_staff_id(&id)?;
    state.staff_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Staff member {id} deleted."),
    })))
}
