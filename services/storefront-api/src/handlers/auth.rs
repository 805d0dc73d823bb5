//! Authentication handlers (login)

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/login
///
/// Check credentials and issue a fresh session token. Both fields are
/// optional at the deserialization layer so that a missing field reaches the
/// core check and comes back as a 400 rather than a deserialization reject.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = state
        .store
        .login(req.email.as_deref(), req.password.as_deref())?;

    Ok(Json(LoginResponse {
        token: session.token,
    }))
}
