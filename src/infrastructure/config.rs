//! Runtime configuration loaded from `config.toml`.

use crate::domain::AuthMode;
use crate::infrastructure::gateway::DEFAULT_QUOTE_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const APP_DIR: &str = "fittrack";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `storage.json`, exports and the log file
    pub data_dir: PathBuf,
    pub quote_endpoint: String,
    pub request_timeout_secs: u64,
    /// Artificial delay applied to exercise searches
    pub search_latency_ms: u64,
    pub auth_mode: AuthMode,
    /// Defaults to `<data_dir>/fittrack.log`
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(".fittrack")),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            request_timeout_secs: 10,
            search_latency_ms: 800,
            auth_mode: AuthMode::Validated,
            log_file: None,
        }
    }
}

impl Config {
    /// `<config dir>/fittrack/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| self.data_dir.join("fittrack.log"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search_latency(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_file_overrides_given_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/tmp/ft\"\nauth_mode = \"demo\"\nsearch_latency_ms = 0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ft"));
        assert_eq!(config.auth_mode, AuthMode::Demo);
        assert!(config.search_latency().is_zero());
        assert_eq!(config.quote_endpoint, DEFAULT_QUOTE_ENDPOINT);
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/ft/storage.json"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/ft/fittrack.log"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auth_mode = \"sometimes\"").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
