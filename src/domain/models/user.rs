use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
}

impl User {
    /// Reconstruct a user from a persisted record. The id is assigned by
    /// the store at insert time and never changes afterwards.
    pub fn new(id: Uuid, username: String) -> Self {
        Self {
            id: UserId(id),
            username,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
