//! Configuration management
//!
//! Sources, lowest precedence first: built-in defaults, `config/default.toml`,
//! `config/<GONNECT_ENV>.toml`, an explicit `--config` file, then environment
//! variables such as `GONNECT__CONSOLE__TABLE=tenants`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use gonnect_core::domain::AddonDescriptor;

use crate::error::AppError;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub console: ConsoleSettings,
    /// Pre-registered connections, keyed by tag.
    #[serde(default)]
    pub databases: HashMap<String, DatabaseSettings>,
    #[serde(default)]
    pub addons: Vec<AddonSettings>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ConsoleSettings {
    pub db_tag: Option<String>,
    pub table: Option<String>,
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AddonSettings {
    pub name: String,
    pub version: String,
    pub installation_url: String,
}

impl From<&AddonSettings> for AddonDescriptor {
    fn from(addon: &AddonSettings) -> Self {
        AddonDescriptor::new(&addon.name, &addon.version, &addon.installation_url)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            directory: default_log_directory(),
        }
    }
}

impl AppConfig {
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("GONNECT_ENV").unwrap_or_else(|_| "development".into());
        let mut builder = Config::builder()
            .set_default("console.prefix", "")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", "pretty")?
            .set_default("logging.directory", "logs")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("GONNECT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: Self = config.try_deserialize()?;
        info!(
            env = %env,
            explicit = ?explicit,
            databases = config.databases.len(),
            addons = config.addons.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn addon_descriptors(&self) -> Vec<AddonDescriptor> {
        self.addons.iter().map(AddonDescriptor::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[console]
db_tag = "primary"
table = "atlas_tenants"
prefix = "staging"

[databases.primary]
url = "postgres://gonnect@localhost/gonnect"

[[addons]]
name = "Team Calendar"
version = "1.2.0"
installation_url = "https://addons.example/calendar/1.2.0/atlassian-connect.json"

[[addons]]
name = "Team Calendar"
version = "1.3.0"
installation_url = "https://addons.example/calendar/1.3.0/atlassian-connect.json"
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.console.db_tag.as_deref(), Some("primary"));
        assert_eq!(config.console.table.as_deref(), Some("atlas_tenants"));
        assert_eq!(config.console.prefix, "staging");

        let primary = &config.databases["primary"];
        assert_eq!(primary.max_connections, 5);
        assert_eq!(primary.acquire_timeout_seconds, 3);

        let addons = config.addon_descriptors();
        assert_eq!(addons.len(), 2);
        assert_eq!(addons[1].version, "1.3.0");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/gonnect.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
