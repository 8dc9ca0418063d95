use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::register::AuthResponse;
use super::ApiError;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    // A name that fails validation can't belong to any user; same 401 as a
    // wrong password so nothing is revealed about which usernames exist
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let user = state
        .user_service
        .authenticate(&username, &body.password)
        .await?;

    let token = state.token_service.issue(user.id.0)?;

    Ok(Json(AuthResponse {
        success: true,
        user_id: user.id.0,
        token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}
