//! Liveness endpoint for the statuswatch server API.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    /// Fixed identification message
    pub message: String,
}

/// Liveness endpoint.
///
/// `GET /`
///
/// Returns a fixed identification message. Stays outside the authenticated
/// routes so probes need no credentials.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Status update API".to_string(),
    })
}
