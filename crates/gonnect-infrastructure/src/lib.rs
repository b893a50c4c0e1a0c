//! # Gonnect Infrastructure
//!
//! PostgreSQL adapters for the tenant store port.

pub mod database;
pub mod error;

pub use database::{create_pool, DatabaseRegistry, PgTenantStore};
pub use error::InfraError;
