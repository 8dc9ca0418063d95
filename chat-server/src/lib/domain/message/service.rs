use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::MessageError;
use super::models::Message;
use super::models::MessageContent;
use super::models::NewMessage;
use super::ports::MessageRepository;
use super::ports::MessageServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Concrete implementation of MessageServicePort.
///
/// Validates both participants against the user store before persisting;
/// timestamps are assigned here, never taken from the caller.
pub struct MessageService<MR, UR>
where
    MR: MessageRepository,
    UR: UserRepository,
{
    message_repository: Arc<MR>,
    user_repository: Arc<UR>,
}

impl<MR, UR> MessageService<MR, UR>
where
    MR: MessageRepository,
    UR: UserRepository,
{
    /// Create a new message service with injected dependencies.
    pub fn new(message_repository: Arc<MR>, user_repository: Arc<UR>) -> Self {
        Self {
            message_repository,
            user_repository,
        }
    }

    async fn ensure_user_exists(&self, id: UserId) -> Result<(), MessageError> {
        self.user_repository
            .find_by_id(id)
            .await
            .map_err(|e| MessageError::Database(e.to_string()))?
            .ok_or(MessageError::UnknownUser(id))?;
        Ok(())
    }
}

#[async_trait]
impl<MR, UR> MessageServicePort for MessageService<MR, UR>
where
    MR: MessageRepository + 'static,
    UR: UserRepository + 'static,
{
    async fn send_message(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: MessageContent,
    ) -> Result<Message, MessageError> {
        if sender_id == receiver_id {
            return Err(MessageError::SelfAddressed);
        }

        self.ensure_user_exists(sender_id).await?;
        self.ensure_user_exists(receiver_id).await?;

        let message = NewMessage {
            sender_id,
            receiver_id,
            content,
            timestamp: Utc::now(),
        };

        let saved_message = self.message_repository.create(message).await?;

        tracing::debug!(
            message_id = saved_message.id.0,
            sender_id = sender_id.0,
            receiver_id = receiver_id.0,
            "Message stored"
        );

        Ok(saved_message)
    }

    async fn get_conversation(
        &self,
        user_a: UserId,
        user_b: UserId,
    ) -> Result<Vec<Message>, MessageError> {
        self.message_repository.find_between(user_a, user_b).await
    }
}
