//! Error types for workout-config.

use std::path::PathBuf;

/// Result type alias for workout-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when resolving configuration.
///
/// The absence of a configuration file is not an error; resolution falls
/// through to defaults and environment variables. The only failure mode is a
/// file that exists but cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration file was found but could not be read or parsed.
    #[error("unable to read configuration file {}: {source}", path.display())]
    Load {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// The underlying read/parse error.
        #[source]
        source: config::ConfigError,
    },
}
