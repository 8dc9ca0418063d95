use async_trait::async_trait;

use crate::domain::message::errors::MessageError;
use crate::domain::message::models::Message;
use crate::domain::message::models::MessageContent;
use crate::domain::message::models::NewMessage;
use crate::domain::user::models::UserId;

/// Port for message domain service operations.
#[async_trait]
pub trait MessageServicePort: Send + Sync + 'static {
    /// Record a new message from sender to receiver.
    ///
    /// # Errors
    /// * `SelfAddressed` - Sender and receiver are the same user
    /// * `UnknownUser` - Sender or receiver does not exist
    /// * `Database` - Database operation failed
    async fn send_message(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: MessageContent,
    ) -> Result<Message, MessageError>;

    /// Retrieve the conversation between two users.
    ///
    /// Order-independent as to which participant is passed first; messages
    /// come back ascending by timestamp, ties broken by id.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn get_conversation(
        &self,
        user_a: UserId,
        user_b: UserId,
    ) -> Result<Vec<Message>, MessageError>;
}

/// Persistence operations for the message aggregate.
#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
    /// Persist a new message and return it with its assigned id.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn create(&self, message: NewMessage) -> Result<Message, MessageError>;

    /// Retrieve all messages exchanged between the unordered pair of users,
    /// ascending by timestamp then id.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_between(
        &self,
        user_a: UserId,
        user_b: UserId,
    ) -> Result<Vec<Message>, MessageError>;
}
