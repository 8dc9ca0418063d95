use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error for MessageContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageContentError {
    #[error("Message content must not be empty")]
    Empty,

    #[error("Message content too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all message-related operations
#[derive(Debug, Clone, Error)]
pub enum MessageError {
    #[error("Invalid message content: {0}")]
    InvalidContent(#[from] MessageContentError),

    #[error("Cannot send a message to yourself")]
    SelfAddressed,

    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    #[error("Database error: {0}")]
    Database(String),
}
