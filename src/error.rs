//! Error types for the library loan system

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// True when the store rejected a write because a referenced row is missing
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            AppError::Database(sqlx::Error::Database(err)) => err.is_foreign_key_violation(),
            _ => false,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
