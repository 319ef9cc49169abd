//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the per-user configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout for retrieving an index page.
    #[serde(default = "default_timeout")]
    pub index_timeout_seconds: u64,

    /// Timeout for the HEAD existence probe.
    #[serde(default = "default_timeout")]
    pub probe_timeout_seconds: u64,

    /// Timeout for downloading a single resource.
    #[serde(default = "default_timeout")]
    pub download_timeout_seconds: u64,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Whether to show a progress bar for large downloads.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Whether skipped resources are logged at info level.
    #[serde(default = "default_true")]
    pub show_skipped: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            index_timeout_seconds: default_timeout(),
            probe_timeout_seconds: default_timeout(),
            download_timeout_seconds: default_timeout(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_skipped: true,
        }
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl HttpConfig {
    pub fn index_timeout(&self) -> Duration {
        Duration::from_secs(self.index_timeout_seconds)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_seconds)
    }

    /// Set every timeout to the same value.
    pub fn set_all_timeouts(&mut self, seconds: u64) {
        self.index_timeout_seconds = seconds;
        self.probe_timeout_seconds = seconds;
        self.download_timeout_seconds = seconds;
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Using config file {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Location of the per-user configuration file, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_sixty_second_timeouts() {
        let config = Config::default();
        assert_eq!(config.http.download_timeout(), Duration::from_secs(60));
        assert_eq!(config.http.index_timeout(), Duration::from_secs(60));
        assert_eq!(config.http.probe_timeout(), Duration::from_secs(60));
        assert!(config.options.show_skipped);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [http]
            download_timeout_seconds = 15

            [options]
            show_progress = false
            "#,
        )
        .unwrap();

        assert_eq!(config.http.download_timeout_seconds, 15);
        assert_eq!(config.http.index_timeout_seconds, 60);
        assert!(!config.options.show_progress);
        assert!(config.options.show_skipped);
        assert!(config.http.user_agent.starts_with("dataset-downloader/"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[http]\nuser_agent = \"custom-agent\"\n").unwrap();

        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.http.user_agent, "custom-agent");
    }

    #[test]
    fn test_set_all_timeouts() {
        let mut http = HttpConfig::default();
        http.set_all_timeouts(5);
        assert_eq!(http.index_timeout_seconds, 5);
        assert_eq!(http.probe_timeout_seconds, 5);
        assert_eq!(http.download_timeout_seconds, 5);
    }
}
