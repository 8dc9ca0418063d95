use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::message::errors::MessageError;
use crate::domain::message::models::Message;
use crate::domain::message::models::MessageContent;
use crate::domain::message::models::MessageId;
use crate::domain::message::models::NewMessage;
use crate::domain::message::ports::MessageRepository;
use crate::domain::user::models::UserId;

pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &SqliteRow) -> Result<Message, MessageError> {
        Ok(Message {
            id: MessageId(row.try_get("id").map_err(db_error)?),
            sender_id: UserId(row.try_get("sender_id").map_err(db_error)?),
            receiver_id: UserId(row.try_get("receiver_id").map_err(db_error)?),
            content: MessageContent::new(row.try_get("content").map_err(db_error)?)?,
            timestamp: row.try_get("timestamp").map_err(db_error)?,
        })
    }
}

fn db_error(e: sqlx::Error) -> MessageError {
    MessageError::Database(e.to_string())
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn create(&self, message: NewMessage) -> Result<Message, MessageError> {
        let result = sqlx::query(
            "INSERT INTO messages (sender_id, receiver_id, content, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(message.sender_id.0)
        .bind(message.receiver_id.0)
        .bind(message.content.as_str())
        .bind(message.timestamp)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(Message {
            id: MessageId(result.last_insert_rowid()),
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content,
            timestamp: message.timestamp,
        })
    }

    async fn find_between(
        &self,
        user_a: UserId,
        user_b: UserId,
    ) -> Result<Vec<Message>, MessageError> {
        // Unordered pair match; id breaks timestamp ties deterministically
        let rows = sqlx::query(
            "SELECT id, sender_id, receiver_id, content, timestamp
             FROM messages
             WHERE (sender_id = ?1 AND receiver_id = ?2)
                OR (sender_id = ?2 AND receiver_id = ?1)
             ORDER BY timestamp ASC, id ASC",
        )
        .bind(user_a.0)
        .bind(user_b.0)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(Self::row_to_message).collect()
    }
}
