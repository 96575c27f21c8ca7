//! Users Domain
//!
//! The single entity of the user directory: a SeaORM entity for the `users`
//! table, the domain model, and a repository trait with its MySQL
//! implementation.

pub mod entity;
pub mod error;
pub mod models;
pub mod mysql;
pub mod repository;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, User};
pub use mysql::MysqlUserRepository;
pub use repository::UserRepository;
