//! Built-in default values, the lowest configuration layer.

use super::ConfigSource;
use crate::error::Result;
use crate::settings::Setting;
use std::collections::BTreeMap;

/// The defaults layer.
///
/// Yields the built-in default for every known setting, guaranteeing that a
/// resolved configuration is total even when no file or environment variable
/// contributes anything.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
    fn load(&self) -> Result<BTreeMap<Setting, String>> {
        Ok(Setting::ALL
            .into_iter()
            .map(|setting| (setting, setting.default_value().to_string()))
            .collect())
    }

    fn name(&self) -> String {
        "defaults".to_string()
    }

    fn priority(&self) -> i32 {
        100
    }
}
