//! Status update handler.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use statuswatch_store::ServiceUpdateRow;

use crate::auth::AuthenticatedUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Pushed status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// Target service primary key
    pub service_id: i64,

    /// New status label
    pub status: String,

    /// Optional free-form detail
    #[serde(default)]
    pub message: Option<String>,

    /// Tool reporting the update
    pub tool_name: String,
}

/// Response after a recorded update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    /// Fixed confirmation message
    pub message: String,

    /// Echoed target service
    pub service_id: i64,

    /// Echoed status label
    pub status: String,

    /// Echoed reporting tool
    pub tool_name: String,

    /// Username that authenticated the request
    pub updated_by: String,
}

/// Record a pushed status update.
///
/// `POST /status/update`
///
/// Verifies that the referenced service exists, then appends one row to the
/// `service_updates` table.
///
/// # Returns
///
/// - `200 OK` with a confirmation echoing the update
/// - `404 Not Found` when the service id is not registered
/// - `500 Internal Server Error` when the insert yields no row
pub async fn update_status(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(username)): Extension<AuthenticatedUser>,
    Json(update): Json<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let service = state
        .store
        .service_by_id(update.service_id)
        .await?
        .ok_or(AppError::ServiceNotFound(update.service_id))?;

    let row = ServiceUpdateRow {
        service_id: service.id,
        status: update.status.clone(),
        message: update.message.clone(),
        tool_name: update.tool_name.clone(),
    };

    state.store.record_service_update(&row).await?;

    tracing::info!(
        service_id = service.id,
        status = %update.status,
        tool_name = %update.tool_name,
        updated_by = %username,
        "Service status recorded"
    );

    Ok(Json(StatusUpdateResponse {
        message: "Status updated successfully".to_string(),
        service_id: update.service_id,
        status: update.status,
        tool_name: update.tool_name,
        updated_by: username,
    }))
}
