//! File-based configuration source.

use super::ConfigSource;
use crate::error::{ConfigError, Result};
use crate::settings::Setting;
use config::{File, FileFormat};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file searched for in each directory.
pub const CONFIG_FILE_NAME: &str = "application-properties.toml";

/// File-based configuration source.
///
/// Searches an ordered list of directories for a file named
/// [`CONFIG_FILE_NAME`] and reads the first match as TOML. A missing file is
/// an expected deployment mode (e.g. containers configured purely through
/// environment variables) and yields an empty layer; a file that exists but
/// cannot be read or parsed is an error.
pub struct FileSource {
    search_paths: Vec<PathBuf>,
}

impl FileSource {
    /// Create a file source over the given search directories.
    ///
    /// Directories are tried in order; the first one containing the
    /// configuration file wins. An empty list means no file layer at all.
    pub fn new<P: AsRef<Path>>(search_paths: &[P]) -> Self {
        Self {
            search_paths: search_paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }

    /// Locate the configuration file, if any search directory contains one.
    fn discover(&self) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<BTreeMap<Setting, String>> {
        let Some(path) = self.discover() else {
            info!("no configuration file found; proceeding without one");
            return Ok(BTreeMap::new());
        };

        debug!(path = %path.display(), "reading configuration file");

        let parsed = config::Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(true))
            .build()
            .map_err(|source| ConfigError::Load {
                path: path.clone(),
                source,
            })?;

        let mut values = BTreeMap::new();
        for setting in Setting::ALL {
            match parsed.get_string(setting.key()) {
                Ok(value) => {
                    values.insert(setting, value);
                }
                // Keys absent from the file fall through to lower layers.
                Err(config::ConfigError::NotFound(_)) => {}
                Err(source) => {
                    return Err(ConfigError::Load {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        Ok(values)
    }

    fn name(&self) -> String {
        format!("file:{CONFIG_FILE_NAME}")
    }

    fn priority(&self) -> i32 {
        200
    }
}
