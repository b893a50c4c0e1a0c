//! # Gonnect Console
//!
//! Terminal console for inspecting and toggling per-tenant flags of an
//! Atlassian Connect add-on host.

pub mod controller;
pub mod display;
pub mod error;
pub mod event;
pub mod feature;
pub mod host;
pub mod panel;
pub mod panels;
pub mod theme;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use controller::ConsoleController;
pub use error::ConsoleError;
pub use feature::{Console, ConsoleFeature};
pub use host::Host;
