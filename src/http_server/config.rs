//! HTTP Server Configuration
//!
//! Host, port, static asset directory and CORS settings.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. JSON config file
//! 3. `PORT` environment variable
//! 4. Command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 9009)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the UI's `index.html` and assets (default: "frontend")
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// CORS allowed origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9009
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("frontend")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective config from every source.
    ///
    /// `env_port` is the raw value of `PORT`, if set.
    pub fn resolve(
        file: Option<&Path>,
        env_port: Option<&str>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(raw) = env_port.map(str::trim).filter(|raw| !raw.is_empty()) {
            config.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        }

        if let Some(host) = overrides.host {
            config.host = host;
        }
        if let Some(port) = overrides.port {
            config.port = port;
        }
        if let Some(static_dir) = overrides.static_dir {
            config.static_dir = static_dir;
        }

        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Single-page-app entry point
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9009);
        assert_eq!(config.static_dir, PathBuf::from("frontend"));
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.index_file(), PathBuf::from("frontend/index.html"));
    }

    #[test]
    fn test_env_port_overrides_default() {
        let config =
            HttpServerConfig::resolve(None, Some("3000"), ConfigOverrides::default()).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_blank_env_port_ignored() {
        let config = HttpServerConfig::resolve(None, Some(" "), ConfigOverrides::default()).unwrap();
        assert_eq!(config.port, 9009);
    }

    #[test]
    fn test_invalid_env_port() {
        let err = HttpServerConfig::resolve(None, Some("http"), ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "http"));
    }

    #[test]
    fn test_flags_override_env() {
        let overrides = ConfigOverrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(4000),
            static_dir: Some(PathBuf::from("dist")),
        };
        let config = HttpServerConfig::resolve(None, Some("3000"), overrides).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:4000");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 7000, "cors_origins": ["http://localhost:5173"]}}"#).unwrap();

        let config = HttpServerConfig::resolve(Some(file.path()), None, ConfigOverrides::default())
            .unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.cors_origins, vec!["http://localhost:5173".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = HttpServerConfig::load(Path::new("/nonexistent/book-tracker.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = HttpServerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
