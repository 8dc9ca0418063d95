use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `Database` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and return the matching user.
    ///
    /// Fails identically for an unknown username and a wrong password, so
    /// callers cannot probe which usernames exist.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or password mismatch
    /// * `Database` - Database operation failed
    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Database` - Database operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// List every user except the given one, ordered by id ascending.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_users_excluding(&self, id: UserId) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and return it with its assigned id.
    ///
    /// The uniqueness check and the insert are a single atomic operation at
    /// the storage layer; concurrent registrations of the same username
    /// yield exactly one success.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `Database` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username (case-sensitive exact match).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all users except the given id, ordered by id ascending.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_excluding(&self, id: UserId) -> Result<Vec<User>, UserError>;
}
