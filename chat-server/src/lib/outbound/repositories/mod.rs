pub mod message;
pub mod user;

pub use message::SqliteMessageRepository;
pub use user::SqliteUserRepository;
