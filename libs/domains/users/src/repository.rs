use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; the returned record carries the assigned id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// List every user, ascending by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Delete a user by id, returning the number of rows affected.
    /// Deleting an id that does not exist succeeds with zero rows.
    async fn delete(&self, id: i64) -> UserResult<u64>;
}
