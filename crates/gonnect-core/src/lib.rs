//! # Gonnect Core
//!
//! Domain entities, the tenant context codec and the tenant store port used by
//! the operator console.

pub mod domain;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use repositories::TenantStore;
