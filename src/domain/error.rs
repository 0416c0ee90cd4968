use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Username already exists")]
    DuplicateUsername { username: String },

    #[error("Password hashing failed")]
    PasswordHashing,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unique constraint violation")]
    UniqueViolation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
