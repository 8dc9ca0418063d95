use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::message::errors::MessageContentError;
use crate::domain::user::models::UserId;

/// Message aggregate root entity.
///
/// A single direct message between two users. Append-only: once created a
/// message is never updated or deleted.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: MessageContent,
    pub timestamp: DateTime<Utc>,
}

/// Message unique identifier value object.
///
/// Assigned by storage at insert time; also the deterministic tie-breaker
/// for messages sharing a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub i64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Message content value object with validation.
///
/// Ensures content is non-empty and within the 4000 character limit.
#[derive(Debug, Clone)]
pub struct MessageContent(String);

impl MessageContent {
    const MAX_LENGTH: usize = 4000;

    /// Create a new validated message content.
    ///
    /// # Errors
    /// * `Empty` - Content is empty string
    /// * `TooLong` - Content exceeds 4000 characters
    pub fn new(content: String) -> Result<Self, MessageContentError> {
        let length = content.len();
        if length == 0 {
            Err(MessageContentError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(MessageContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(content))
        }
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A message awaiting insertion; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: MessageContent,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_rejects_empty() {
        assert!(matches!(
            MessageContent::new(String::new()).unwrap_err(),
            MessageContentError::Empty
        ));
    }

    #[test]
    fn test_content_length_limit() {
        assert!(MessageContent::new("a".repeat(4000)).is_ok());
        assert!(matches!(
            MessageContent::new("a".repeat(4001)).unwrap_err(),
            MessageContentError::TooLong { .. }
        ));
    }
}
