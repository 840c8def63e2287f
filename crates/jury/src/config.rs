//! Client configuration.
//!
//! Values come from defaults, an optional TOML file and finally explicit
//! overrides applied through [`JuryConfigBuilder`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::export::CSV_FILE_NAME;

/// Default data source address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the judging client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JuryConfig {
    /// Base URL of the REST data source
    pub base_url: String,
    /// Directory holding persisted display state
    pub state_dir: PathBuf,
    /// Where the CSV export is written
    pub export_path: PathBuf,
    /// Global timeout for a single request
    pub request_timeout_secs: u64,
}

impl Default for JuryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            state_dir: default_state_dir(),
            export_path: PathBuf::from(CSV_FILE_NAME),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Platform config directory for the client, falling back to `.jury`
pub fn default_state_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("jury"))
        .unwrap_or_else(|| PathBuf::from(".jury"))
}

impl JuryConfig {
    /// Create a new configuration builder
    pub fn builder() -> JuryConfigBuilder {
        JuryConfigBuilder::default()
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path).map_err(Error::from) {
            Ok(c) => c,
            Err(e) if e.is_not_found() => {
                warn!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };

        let config = Self::from_toml(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("base_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for JuryConfig
#[derive(Debug, Clone, Default)]
pub struct JuryConfigBuilder {
    base: Option<JuryConfig>,
    base_url: Option<String>,
    state_dir: Option<PathBuf>,
    export_path: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
}

impl JuryConfigBuilder {
    /// Start from an existing configuration instead of the defaults
    pub fn base(mut self, config: JuryConfig) -> Self {
        self.base = Some(config);
        self
    }

    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn state_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.state_dir = Some(path.into());
        self
    }

    pub fn export_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.export_path = Some(path.into());
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> JuryConfig {
        let default = self.base.unwrap_or_default();
        JuryConfig {
            base_url: self.base_url.unwrap_or(default.base_url),
            state_dir: self.state_dir.unwrap_or(default.state_dir),
            export_path: self.export_path.unwrap_or(default.export_path),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(default.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = JuryConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.export_path, PathBuf::from("scores.csv"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_builder_overrides() {
        let config = JuryConfig::builder()
            .base_url("http://example.org/wormcat3")
            .state_dir("/tmp/jury-state")
            .request_timeout_secs(5)
            .build();
        assert_eq!(config.base_url, "http://example.org/wormcat3");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/jury-state"));
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.export_path, PathBuf::from("scores.csv"));
    }

    #[test]
    fn test_builder_on_base_keeps_unset_fields() {
        let base = JuryConfig::builder().request_timeout_secs(7).build();
        let config = JuryConfig::builder().base(base).base_url("http://x").build();
        assert_eq!(config.request_timeout_secs, 7);
        assert_eq!(config.base_url, "http://x");
    }

    #[test]
    fn test_partial_toml() {
        let config = JuryConfig::from_toml("base_url = \"http://judging:8000\"\n").unwrap();
        assert_eq!(config.base_url, "http://judging:8000");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            JuryConfig::from_toml("base_url = "),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            JuryConfig::from_toml("request_timeout_secs = 0"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = JuryConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, JuryConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jury.toml");
        fs::write(&path, "export_path = \"out/results.csv\"\nrequest_timeout_secs = 10\n").unwrap();

        let config = JuryConfig::load(&path).unwrap();
        assert_eq!(config.export_path, PathBuf::from("out/results.csv"));
        assert_eq!(config.request_timeout_secs, 10);
    }
}
