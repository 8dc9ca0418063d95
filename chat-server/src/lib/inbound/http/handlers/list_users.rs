use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::get_user::UserData;
use super::ApiError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Every user except the caller, ordered by id ascending.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = state
        .user_service
        .list_users_excluding(auth_user.user_id)
        .await?;

    Ok(Json(users.iter().map(UserData::from).collect()))
}
