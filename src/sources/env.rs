//! Environment variable configuration source.

use super::ConfigSource;
use crate::error::Result;
use crate::settings::Setting;
use std::collections::BTreeMap;
use std::env;
use tracing::debug;

/// Environment variable configuration source.
///
/// The highest-priority layer. For each known setting, the process
/// environment is consulted under the variable name produced by
/// [`Setting::env_key`] (dotted key, `.` replaced with `_`, uppercased);
/// a present variable overrides both the file value and the default.
///
/// # Examples
///
/// ```rust
/// use workout_config::sources::EnvSource;
///
/// // DATA_SOURCE=... -> data.source
/// let source = EnvSource::new();
/// ```
pub struct EnvSource;

impl EnvSource {
    /// Create a new environment variable source.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<BTreeMap<Setting, String>> {
        let mut values = BTreeMap::new();
        for setting in Setting::ALL {
            if let Ok(value) = env::var(setting.env_key()) {
                debug!(%setting, "environment variable override present");
                values.insert(setting, value);
            }
        }
        Ok(values)
    }

    fn name(&self) -> String {
        "environment".to_string()
    }

    fn priority(&self) -> i32 {
        300
    }
}
