use thiserror::Error;

use gonnect_core::DomainError;
use gonnect_infrastructure::InfraError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("database handle tag not set")]
    MissingDatabaseTag,

    #[error("tenant table name not set")]
    MissingTableName,

    #[error("database {tag:?} unavailable: {source}")]
    DatabaseUnavailable {
        tag: String,
        #[source]
        source: InfraError,
    },

    #[error("tenant store error: {0}")]
    Store(#[from] DomainError),

    #[error("feature {feature} depends on missing feature {missing}")]
    UnsatisfiedDependency { feature: String, missing: String },

    #[error("theme not found: {0}")]
    UnknownTheme(String),

    #[error("panel {key} init failed: {reason}")]
    PanelInit { key: String, reason: String },

    #[error("no panels registered")]
    NoPanels,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
