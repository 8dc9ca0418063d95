use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::message::errors::MessageError;
use crate::user::errors::UserError;

pub mod get_conversation;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register;
pub mod send_message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameTaken(_) => {
                ApiError::BadRequest("Username already exists".to_string())
            }
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::InvalidUsername(e) => ApiError::BadRequest(e.to_string()),
            UserError::Database(_) | UserError::Unknown(_) => {
                // Detail goes to the log, not the client
                tracing::error!("User operation failed: {}", err);
                ApiError::InternalServerError
            }
        }
    }
}

impl From<MessageError> for ApiError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::InvalidContent(_)
            | MessageError::SelfAddressed
            | MessageError::UnknownUser(_) => ApiError::BadRequest(err.to_string()),
            MessageError::Database(_) => {
                tracing::error!("Message operation failed: {}", err);
                ApiError::InternalServerError
            }
        }
    }
}

impl From<auth::TokenError> for ApiError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::EncodingFailed(_) => {
                tracing::error!("Token issuance failed: {}", err);
                ApiError::InternalServerError
            }
            _ => ApiError::Unauthorized("Invalid or expired token".to_string()),
        }
    }
}
