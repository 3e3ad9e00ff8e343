use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Password hashing and verification are CPU-bound and run on Tokio's
/// blocking pool so request tasks are not stalled.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Hasher carrying the configured work factor
    pub fn new(repository: Arc<UR>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(password))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(UserError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<(), UserError> {
        let hasher = self.password_hasher.clone();

        let verified = tokio::task::spawn_blocking(move || hasher.verify(password, &hash))
            .await
            .map_err(|e| {
                UserError::Unknown(format!("Password verification task failed: {}", e))
            })?;

        match verified {
            Ok(()) => Ok(()),
            Err(PasswordError::Mismatch) => Err(UserError::InvalidCredentials),
            Err(PasswordError::MalformedHash(reason)) => {
                tracing::warn!(reason = %reason, "Stored password hash is malformed");
                Err(UserError::InvalidCredentials)
            }
            Err(e) => Err(UserError::Password(e)),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hash_password(command.password).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn authenticate(&self, command: LoginCommand) -> Result<User, UserError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(UserError::InvalidCredentials);
        };

        self.verify_password(command.password, user.password_hash.clone())
            .await
            .inspect_err(|e| {
                tracing::debug!(user_id = %user.id, error = %e, "Login rejected");
            })?;

        Ok(user)
    }

    async fn reset(&self) -> Result<u64, UserError> {
        let removed = self.repository.delete_all().await?;
        tracing::warn!(removed, "All users deleted");

        Ok(removed)
    }
}
