use tracing::warn;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::user::User,
    repositories::user_repository::UserRepository,
    services::password_service::PasswordHasher,
};

pub struct RegisterUserUsecase<R: UserRepository, P: PasswordHasher> {
    user_repository: R,
    password_hasher: P,
}

impl<R: UserRepository, P: PasswordHasher> RegisterUserUsecase<R, P> {
    pub fn new(user_repository: R, password_hasher: P) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Register a new account: reject duplicate usernames, hash the
    /// password, persist the record. The store assigns the id.
    pub async fn register(&self, username: String, password: String) -> Result<User, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        // Fast-path duplicate check. Two requests can still race past this;
        // the store's unique constraint on username is the authoritative guard.
        if self.user_repository.exists_by_username(&username).await? {
            return Err(DomainError::DuplicateUsername { username });
        }

        // Hash password before anything touches the store
        let password_hash = self.password_hasher.hash(&password)?;

        let saved = self.user_repository.save(&username, password_hash).await;
        match saved {
            Ok(user) => Ok(user),
            Err(RepositoryError::UniqueViolation) => {
                warn!(%username, "registration lost the race to a concurrent insert");
                Err(DomainError::DuplicateUsername { username })
            }
            Err(other) => Err(other.into()),
        }
    }
}
