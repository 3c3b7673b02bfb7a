/// Errors raised by document store operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
