use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::message::models::Message;
use crate::domain::message::models::MessageContent;
use crate::domain::message::ports::MessageServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Record a message from the authenticated caller to `receiver_id`.
///
/// The sender is always the token's subject; a sender id in the body would
/// be ignored because the request type has no such field.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageData>), ApiError> {
    let content = MessageContent::new(body.content)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let message = state
        .message_service
        .send_message(auth_user.user_id, UserId(body.receiver_id), content)
        .await?;

    Ok((StatusCode::CREATED, Json((&message).into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendMessageRequest {
    receiver_id: i64,
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Message> for MessageData {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.0,
            sender_id: message.sender_id.0,
            receiver_id: message.receiver_id.0,
            content: message.content.as_str().to_string(),
            timestamp: message.timestamp,
        }
    }
}
