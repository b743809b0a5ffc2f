//! The resolved configuration handle.

use crate::error::Result;
use crate::loader::ConfigLoader;
use crate::settings::Setting;
use crate::sources::{DefaultsSource, EnvSource, FileSource};
use std::collections::BTreeMap;
use std::path::Path;

/// The merged, queryable result of one configuration load.
///
/// Produced once at process startup by [`ResolvedConfig::load`] (or by
/// [`ResolvedConfig::defaults`] for deterministic tests) and handed to the
/// bootstrap code, which passes it to whichever component needs it. Each
/// instance is independent; there is no process-wide singleton.
///
/// Defaults cover every [`Setting`], so the accessors never fail.
///
/// # Examples
///
/// ```rust,no_run
/// use workout_config::prelude::*;
///
/// # fn example() -> workout_config::error::Result<()> {
/// let config = ResolvedConfig::load(&["/etc/workout", "."])?;
/// let dsn = config.data_source();
/// let level = config.logging_level();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: BTreeMap<Setting, String>,
}

impl ResolvedConfig {
    /// Resolve configuration from all three layers.
    ///
    /// Seeds every setting with its default, reads the first
    /// `application-properties.toml` found under `search_paths` (absence is
    /// an expected deployment mode, not an error), then applies environment
    /// variable overrides. An empty `search_paths` skips the file layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`](crate::error::ConfigError::Load) if a
    /// configuration file exists but cannot be read or parsed. The caller
    /// should treat this as fatal for startup.
    pub fn load<P: AsRef<Path>>(search_paths: &[P]) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(DefaultsSource));
        loader.add_source(Box::new(FileSource::new(search_paths)));
        loader.add_source(Box::new(EnvSource::new()));
        loader.load()
    }

    /// A configuration populated only with the built-in defaults.
    ///
    /// Consults neither the filesystem nor the environment; useful as a
    /// deterministic baseline in tests.
    pub fn defaults() -> Self {
        let values = Setting::ALL
            .into_iter()
            .map(|setting| (setting, setting.default_value().to_string()))
            .collect();
        Self { values }
    }

    pub(crate) fn from_values(values: BTreeMap<Setting, String>) -> Self {
        Self { values }
    }

    /// Override a setting on this instance.
    ///
    /// The new value wins over all three layers for subsequent reads on this
    /// instance only; other instances are unaffected. Intended for tests.
    pub fn set(&mut self, setting: Setting, value: impl Into<String>) {
        self.values.insert(setting, value.into());
    }

    /// The resolved value for `setting`.
    pub fn get(&self, setting: Setting) -> &str {
        // Defaults make the map total; the fallback preserves that invariant
        // even for an instance built from an incomplete layer set.
        self.values
            .get(&setting)
            .map(String::as_str)
            .unwrap_or_else(|| setting.default_value())
    }

    /// Connection string of the database that stores workout data.
    pub fn data_source(&self) -> &str {
        self.get(Setting::DataSource)
    }

    /// The application's logging level.
    pub fn logging_level(&self) -> &str {
        self.get(Setting::LoggingLevel)
    }
}
