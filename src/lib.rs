//! # workout-config
//!
//! Layered configuration resolution for the workout tracking service.
//!
//! ## Overview
//!
//! `workout-config` merges typed configuration values from three layers, in
//! increasing priority:
//!
//! 1. Built-in defaults (always present, so every setting resolves)
//! 2. An optional `application-properties.toml` discovered on a search path
//! 3. Environment variables (setting key with `.` replaced by `_`,
//!    uppercased — e.g. `data.source` reads `DATA_SOURCE`)
//!
//! Resolution is synchronous and happens once at process startup; the
//! resulting [`ResolvedConfig`](resolver::ResolvedConfig) is an independent,
//! immutable-after-load snapshot handed to the bootstrap code.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workout_config::prelude::*;
//!
//! # fn main() -> workout_config::error::Result<()> {
//! let config = ResolvedConfig::load(&["/etc/workout", "."])?;
//!
//! // Handed to the database and logging collaborators.
//! println!("data source: {}", config.data_source());
//! println!("logging level: {}", config.logging_level());
//! # Ok(())
//! # }
//! ```
//!
//! A missing configuration file is not an error — container deployments
//! commonly configure everything through environment variables. A file that
//! exists but cannot be read or parsed fails the load.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod error;
pub mod resolver;
pub mod settings;
pub mod sources;

mod loader;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::error::{ConfigError, Result};
    pub use crate::resolver::ResolvedConfig;
    pub use crate::settings::Setting;
}
