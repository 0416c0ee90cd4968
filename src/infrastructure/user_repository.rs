use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{password::HashedPassword, user::User},
    repositories::user_repository::UserRepository,
};
use crate::infrastructure::entity::users;

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let existing = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(existing.is_some())
    }

    async fn save(
        &self,
        username: &str,
        password_hash: HashedPassword,
    ) -> Result<User, RepositoryError> {
        let id = Uuid::new_v4();
        let user_model = users::ActiveModel {
            id: Set(id),
            username: Set(username.to_string()),
            password_hash: Set(password_hash.as_str().to_string()),
        };

        // The unique index on username is the authoritative duplicate guard;
        // surface its violation distinctly so the usecase can report it.
        users::Entity::insert(user_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::UniqueViolation,
                _ => RepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(User::new(id, username.to_string()))
    }
}
