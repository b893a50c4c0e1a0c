//! # Gonnect Shared
//!
//! Configuration and telemetry shared by the console binary and its adapters.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
