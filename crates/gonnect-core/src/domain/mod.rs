//! # Gonnect Core - Domain Module
//!
//! Tenants as persisted by the add-on host, their JSON context blob and the
//! add-on descriptors published by host features.

pub mod addon;
pub mod context;
pub mod tenant;

pub use addon::AddonDescriptor;
pub use context::{ContextKey, TenantContext};
pub use tenant::{format_timestamp, Tenant, TIMESTAMP_FORMAT};
