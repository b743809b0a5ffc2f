//! Configuration loader that merges the layered sources.

use crate::error::Result;
use crate::resolver::ResolvedConfig;
use crate::sources::ConfigSource;
use std::collections::BTreeMap;
use tracing::debug;

/// Loads and merges configuration from the layered sources.
///
/// Handles precedence by sorting sources by priority and merging them in
/// order (lower priority first), so a higher-priority source overrides
/// values from a lower-priority one.
pub(crate) struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigLoader {
    /// Create a new configuration loader with no sources.
    pub(crate) fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source.
    pub(crate) fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Load every source and merge the layers into a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to load. A source with nothing
    /// to contribute is not a failure.
    pub(crate) fn load(&self) -> Result<ResolvedConfig> {
        let mut sorted_sources: Vec<_> = self.sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        let mut values = BTreeMap::new();
        for source in sorted_sources {
            let layer = source.load()?;
            if !layer.is_empty() {
                debug!(source = %source.name(), settings = layer.len(), "merging layer");
            }
            values.extend(layer);
        }

        Ok(ResolvedConfig::from_values(values))
    }

    /// The source names in merge (priority) order.
    #[allow(dead_code)]
    pub(crate) fn source_names(&self) -> Vec<String> {
        let mut sorted_sources: Vec<_> = self.sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());
        sorted_sources.iter().map(|s| s.name()).collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
