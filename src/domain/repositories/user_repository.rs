use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{password::HashedPassword, user::User},
};

/// Durable keyed storage for user records
#[async_trait]
pub trait UserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Insert a new record and return it with the store-assigned id.
    /// Fails with [`RepositoryError::UniqueViolation`] when the username
    /// collides with an existing row.
    async fn save(
        &self,
        username: &str,
        password_hash: HashedPassword,
    ) -> Result<User, RepositoryError>;
}
