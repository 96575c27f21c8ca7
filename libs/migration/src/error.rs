use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Driver error: {0}")]
    Driver(#[from] sqlx::Error),

    #[error("Invalid migration name '{0}': use lowercase letters, digits, '_' and '-'")]
    InvalidName(String),

    #[error("Invalid migration history: {0}")]
    InvalidHistory(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
