//! The closed set of known configuration settings.

use std::fmt;

/// A known configuration setting.
///
/// The set of settings is fixed at compile time; there is no dynamic key
/// discovery. Each setting carries its dotted key name, its built-in default,
/// and the name of the environment variable that overrides it.
///
/// # Examples
///
/// ```rust
/// use workout_config::settings::Setting;
///
/// assert_eq!(Setting::DataSource.key(), "data.source");
/// assert_eq!(Setting::DataSource.env_key(), "DATA_SOURCE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Setting {
    /// Connection string of the database backing the service.
    DataSource,
    /// The application's logging level (e.g. `INFO`, `DEBUG`).
    LoggingLevel,
}

impl Setting {
    /// Every known setting, in key order.
    pub const ALL: [Setting; 2] = [Setting::DataSource, Setting::LoggingLevel];

    /// The dotted key under which this setting appears in a configuration file.
    pub fn key(self) -> &'static str {
        match self {
            Setting::DataSource => "data.source",
            Setting::LoggingLevel => "logging.level",
        }
    }

    /// The built-in default value for this setting.
    ///
    /// Defaults cover every setting, so a resolved configuration is always
    /// total over [`Setting::ALL`].
    pub fn default_value(self) -> &'static str {
        match self {
            Setting::DataSource => {
                "postgresql://maxroach@localhost:26257/workout?sslmode=disable"
            }
            Setting::LoggingLevel => "INFO",
        }
    }

    /// The environment variable that overrides this setting.
    ///
    /// The name is derived from [`key`](Setting::key) by replacing the
    /// hierarchical separator `.` with `_` and uppercasing. Existing
    /// deployments rely on this exact mapping; do not change it.
    pub fn env_key(self) -> String {
        self.key().replace('.', "_").to_ascii_uppercase()
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
