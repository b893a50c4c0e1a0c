//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Tenant not found: {0}")]
    TenantNotFound(i64),

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    #[error("Context encode error: {0}")]
    ContextEncode(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
