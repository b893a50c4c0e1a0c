//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;
pub mod registry;

pub use connection::create_pool;
pub use postgres::PgTenantStore;
pub use registry::DatabaseRegistry;
