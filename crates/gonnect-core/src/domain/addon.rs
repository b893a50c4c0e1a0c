//! Add-on descriptor published by a host feature

use serde::{Deserialize, Serialize};

/// Several descriptors may share a `name`, one per published version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonDescriptor {
    pub name: String,
    pub version: String,
    pub installation_url: String,
}

impl AddonDescriptor {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        installation_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            installation_url: installation_url.into(),
        }
    }
}
