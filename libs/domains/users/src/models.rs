use serde::{Deserialize, Serialize};

/// User entity - matches the `users` table schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the storage engine
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User(id={}, name={}, email={})",
            self.id, self.name, self.email
        )
    }
}

/// Input for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}
