//! The add-on host the console runs inside: its identity, feature set and
//! pre-registered databases.

use gonnect_core::AddonDescriptor;
use gonnect_infrastructure::DatabaseRegistry;
use gonnect_shared::config::AppConfig;

use crate::error::ConsoleError;

/// A capability registered with the host.
pub trait HostFeature: Send + Sync {
    fn tag(&self) -> &str;

    fn name(&self) -> &str;

    /// Installable add-on published by this feature, if any.
    fn addon_descriptor(&self) -> Option<AddonDescriptor> {
        None
    }
}

/// Provides tagged database connections to other features.
pub struct DatabaseFeature {
    tags: Vec<String>,
}

impl DatabaseFeature {
    pub const TAG: &'static str = "database";

    pub fn new(registry: &DatabaseRegistry) -> Self {
        Self {
            tags: registry.tags().map(str::to_string).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl HostFeature for DatabaseFeature {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn name(&self) -> &str {
        "database"
    }
}

/// Publishes one add-on version.
pub struct AddonFeature {
    tag: String,
    descriptor: AddonDescriptor,
}

impl AddonFeature {
    pub fn new(descriptor: AddonDescriptor) -> Self {
        Self {
            tag: format!("addon-{}-{}", descriptor.name, descriptor.version),
            descriptor,
        }
    }
}

impl HostFeature for AddonFeature {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn name(&self) -> &str {
        &self.descriptor.name
    }

    fn addon_descriptor(&self) -> Option<AddonDescriptor> {
        Some(self.descriptor.clone())
    }
}

pub struct Host {
    bin_name: String,
    version: String,
    features: Vec<Box<dyn HostFeature>>,
    databases: DatabaseRegistry,
}

impl Host {
    pub fn new(bin_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            bin_name: bin_name.into(),
            version: version.into(),
            features: Vec::new(),
            databases: DatabaseRegistry::new(),
        }
    }

    /// Database feature first, then one add-on feature per configured add-on
    /// in config order.
    pub fn from_config(
        bin_name: impl Into<String>,
        version: impl Into<String>,
        config: &AppConfig,
    ) -> Self {
        let mut host = Self::new(bin_name, version);
        host.databases = DatabaseRegistry::from_settings(&config.databases);
        let database = DatabaseFeature::new(&host.databases);
        host.add_feature(Box::new(database));
        for descriptor in config.addon_descriptors() {
            host.add_feature(Box::new(AddonFeature::new(descriptor)));
        }
        host
    }

    pub fn add_feature(&mut self, feature: Box<dyn HostFeature>) {
        self.features.push(feature);
    }

    pub fn bin_name(&self) -> &str {
        &self.bin_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn features(&self) -> impl Iterator<Item = &dyn HostFeature> {
        self.features.iter().map(|f| -> &dyn HostFeature { f.as_ref() })
    }

    pub fn has_feature(&self, tag: &str) -> bool {
        self.features().any(|f| f.tag() == tag)
    }

    /// Descriptors of every feature publishing one, in feature order.
    pub fn addon_descriptors(&self) -> Vec<AddonDescriptor> {
        self.features().filter_map(|f| f.addon_descriptor()).collect()
    }

    pub fn databases(&self) -> &DatabaseRegistry {
        &self.databases
    }

    /// Fail when `feature` depends on a tag no registered feature provides.
    pub fn check_depends(&self, feature: &str, depends: &[&str]) -> Result<(), ConsoleError> {
        match depends.iter().find(|tag| !self.has_feature(tag)) {
            Some(missing) => Err(ConsoleError::UnsatisfiedDependency {
                feature: feature.to_string(),
                missing: missing.to_string(),
            }),
            None => Ok(()),
        }
    }
}
