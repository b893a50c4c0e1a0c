//! Tagged database connections
//!
//! The host registers each configured database under a logical tag; features
//! ask for a pool by tag instead of carrying connection strings around.

use std::collections::BTreeMap;
use std::time::Duration;

use sqlx::PgPool;
use tracing::{error, info};

use gonnect_shared::config::DatabaseSettings;

use super::connection::create_pool;
use crate::error::InfraError;

#[derive(Debug, Clone, Default)]
pub struct DatabaseRegistry {
    entries: BTreeMap<String, DatabaseSettings>,
}

impl DatabaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings<'a>(
        settings: impl IntoIterator<Item = (&'a String, &'a DatabaseSettings)>,
    ) -> Self {
        let mut registry = Self::new();
        for (tag, db) in settings {
            registry.register(tag.clone(), db.clone());
        }
        registry
    }

    pub fn register(&mut self, tag: impl Into<String>, settings: DatabaseSettings) {
        self.entries.insert(tag.into(), settings);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open a pool for the database registered under `tag`.
    pub async fn connect(&self, tag: &str) -> Result<PgPool, InfraError> {
        let settings = self
            .entries
            .get(tag)
            .ok_or_else(|| InfraError::UnknownDatabase(tag.to_string()))?;

        info!(tag, max_connections = settings.max_connections, "connecting database");
        create_pool(
            &settings.url,
            settings.max_connections,
            Duration::from_secs(settings.acquire_timeout_seconds),
        )
        .await
        .map_err(|e| {
            error!("error connecting database {}: {}", tag, e);
            InfraError::ConnectionFailed(e)
        })
    }
}
