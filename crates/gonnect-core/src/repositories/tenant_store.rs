//! Tenant store trait (port)

use async_trait::async_trait;

use crate::domain::Tenant;
use crate::error::DomainError;

/// Read-mostly access to the tenants table.
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// Every tenant in the table, read in one transaction.
    async fn list(&self) -> Result<Vec<Tenant>, DomainError>;

    /// Persist the whole row for `tenant`.
    async fn save(&self, tenant: &Tenant) -> Result<(), DomainError>;
}
