//! Persistence of the active [`ConnectionProfile`].
//!
//! The profile lives in a single JSON file that operators edit through the
//! settings API. It is read again on every connection attempt so an update
//! applies to the very next request.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::profile::ConnectionProfile;

/// Default location of the profile file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "db_config.json";

#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("failed to serialize database config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write database config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigStoreResult<T> = Result<T, ConfigStoreError>;

/// Outcome of reading the persisted profile.
///
/// Falling back to the built-in defaults is a normal first-run condition,
/// not an error, so it is modelled as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLoad {
    Stored(ConnectionProfile),
    Default { reason: String },
}

impl ProfileLoad {
    pub fn into_profile(self) -> ConnectionProfile {
        match self {
            ProfileLoad::Stored(profile) => profile,
            ProfileLoad::Default { .. } => ConnectionProfile::default(),
        }
    }
}

pub trait ConfigStore: Send + Sync {
    /// Reads the persisted profile, reporting whether defaults were used.
    fn load_profile(&self) -> ProfileLoad;

    /// Replaces the persisted profile.
    fn save(&self, profile: &ConnectionProfile) -> ConfigStoreResult<()>;

    /// Reads the persisted profile, silently using defaults when needed.
    fn load(&self) -> ConnectionProfile {
        self.load_profile().into_profile()
    }
}

/// [`ConfigStore`] backed by a JSON file on disk.
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, contents: &[u8]) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

impl ConfigStore for FileConfigStore {
    fn load_profile(&self) -> ProfileLoad {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                log::debug!(
                    "Using default database config, {} unreadable: {err}",
                    self.path.display()
                );
                return ProfileLoad::Default {
                    reason: err.to_string(),
                };
            }
        };

        match serde_json::from_str::<ConnectionProfile>(&contents) {
            Ok(profile) => ProfileLoad::Stored(profile),
            Err(err) => {
                log::debug!(
                    "Using default database config, {} is malformed: {err}",
                    self.path.display()
                );
                ProfileLoad::Default {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn save(&self, profile: &ConnectionProfile) -> ConfigStoreResult<()> {
        let contents = serde_json::to_vec_pretty(profile)?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        self.write_atomically(&contents)
            .map_err(|source| ConfigStoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
