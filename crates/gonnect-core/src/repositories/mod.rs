//! Repository traits (ports)

pub mod tenant_store;

pub use tenant_store::TenantStore;
