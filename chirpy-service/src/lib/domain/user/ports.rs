use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the supplied password.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Check an email and password pair.
    ///
    /// # Returns
    /// The matching user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password or unreadable stored hash
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, command: LoginCommand) -> Result<User, UserError>;

    /// Delete every user (and, through the schema, their chirps).
    ///
    /// # Returns
    /// Number of users removed
    async fn reset(&self) -> Result<u64, UserError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Remove all users from storage.
    ///
    /// # Returns
    /// Number of rows removed
    async fn delete_all(&self) -> Result<u64, UserError>;
}
