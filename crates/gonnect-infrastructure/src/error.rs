//! Infrastructure errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("No database registered under tag {0:?}")]
    UnknownDatabase(String),

    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(#[from] sqlx::Error),
}
