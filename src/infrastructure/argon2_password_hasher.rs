use argon2::{
    Argon2,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{
    error::DomainError, models::password::HashedPassword,
    services::password_service::PasswordHasher,
};

#[derive(Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                DomainError::PasswordHashing
            })?
            .to_string();

        Ok(HashedPassword::new(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    #[test]
    fn hash_is_never_the_plaintext() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("secret123").expect("hashing should succeed");
        assert_ne!(hash.as_str(), "secret123");
    }

    #[test]
    fn hash_is_a_parseable_phc_string() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("secret123").expect("hashing should succeed");
        let parsed = PasswordHash::new(hash.as_str()).expect("hash should parse");
        assert!(
            Argon2::default()
                .verify_password(b"secret123", &parsed)
                .is_ok()
        );
    }

    #[test]
    fn salts_differ_between_calls() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("secret123").expect("hashing should succeed");
        let second = hasher.hash("secret123").expect("hashing should succeed");
        assert_ne!(first, second);
    }
}
