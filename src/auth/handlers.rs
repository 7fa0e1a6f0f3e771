//! Login and logout.
//!
//! Login only registers the user id; logout has no server-side session to
//! end and simply acknowledges.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user_id = request.user_id.trim();
    if user_id.is_empty() {
        return Err(ApiError::bad_request("User ID is required"));
    }

    let conn = db::try_lock(&state.db)?;
    if db::ensure_user(&conn, user_id)? {
        tracing::info!(user_id, "Registered new user");
    }

    Ok(Json(LoginResponse {
        success: true,
        user_id: user_id.to_string(),
        message: "Login successful".to_string(),
    }))
}

/// POST /api/auth/logout
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        success: true,
        message: "Logout successful".to_string(),
    })
}
