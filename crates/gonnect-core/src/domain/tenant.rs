//! Tenant domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for tenant timestamps, e.g. `2023-01-02 03:04 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// A remote site that installed the add-on, identified by its base URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub client_key: String,
    pub base_url: String,
    pub product_type: String,
    pub description: String,
    pub addon_installed: bool,

    /// Raw JSON context blob; empty when the column is NULL or blank.
    pub context: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at)
    }

    pub fn updated_at_display(&self) -> String {
        format_timestamp(&self.updated_at)
    }
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
