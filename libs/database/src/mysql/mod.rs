//! MySQL database connector and utilities
//!
//! Provides DSN parsing/normalization, connection management, and the
//! SeaORM client wrapper for a MySQL-compatible (Vitess/PlanetScale) target.

mod config;
mod connector;
mod dsn;

pub use config::MysqlConfig;
pub use connector::{connect, into_client};
pub use dsn::Dsn;

// Re-export SeaORM types for convenience
pub use sea_orm::{DatabaseConnection, DbErr};
