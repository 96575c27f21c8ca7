use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Query errors propagate verbatim; constraint violations and connection
    /// loss are reported, never retried.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type UserResult<T> = Result<T, UserError>;
