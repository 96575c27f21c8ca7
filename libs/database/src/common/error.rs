/// Unified database error type for connection and query operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MySQL errors surfaced through SeaORM
    #[error("MySQL error: {0}")]
    Mysql(#[from] sea_orm::DbErr),

    /// Errors from the underlying sqlx driver
    #[error("Driver error: {0}")]
    Driver(#[from] sqlx::Error),

    /// The supplied connection string could not be parsed
    #[error("Invalid DSN: {0}")]
    InvalidDsn(String),

    /// Connection establishment failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
