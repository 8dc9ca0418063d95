use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::send_message::MessageData;
use super::ApiError;
use crate::domain::message::ports::MessageServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Chat history between the authenticated caller and `user_id`, ascending
/// by timestamp. Which side is "sender" in each message does not affect
/// the result.
pub async fn get_conversation(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<MessageData>>, ApiError> {
    let messages = state
        .message_service
        .get_conversation(auth_user.user_id, UserId(user_id))
        .await?;

    Ok(Json(messages.iter().map(MessageData::from).collect()))
}
