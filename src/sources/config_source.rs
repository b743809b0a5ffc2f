//! Configuration source trait.

use crate::error::Result;
use crate::settings::Setting;
use std::collections::BTreeMap;

/// Trait for configuration layers.
///
/// A source yields values for the subset of known settings it can answer
/// for. Sources are merged in priority order, so a higher-priority source
/// overrides values from a lower-priority one.
pub trait ConfigSource {
    /// Load this layer's values.
    ///
    /// The returned map may cover any subset of [`Setting::ALL`]; only the
    /// defaults layer is required to be total.
    ///
    /// # Errors
    ///
    /// Returns an error if the source exists but cannot be read or parsed.
    /// A source that simply has nothing to contribute returns an empty map.
    fn load(&self) -> Result<BTreeMap<Setting, String>>;

    /// A human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// The priority of this source (higher = takes precedence).
    ///
    /// Fixed priorities:
    /// - Environment variables: 300
    /// - Configuration file: 200
    /// - Built-in defaults: 100
    fn priority(&self) -> i32 {
        100
    }
}
