//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and applies the
//! `PORT` environment variable override. The service is designed to run with
//! no arguments and no config file at all: every setting has a built-in
//! default matching the container deployment it was written for.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen address (all interfaces, for container networking)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTPS listen port
pub const DEFAULT_PORT: u16 = 443;

/// Default TLS certificate path inside the container image
pub const DEFAULT_CERT_PATH: &str = "/app/server.crt";

/// Default TLS private key path inside the container image
pub const DEFAULT_KEY_PATH: &str = "/app/server.key";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "beacon=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Environment variable that overrides the listen port
pub const PORT_ENV_VAR: &str = "PORT";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// TLS certificate and key locations
    #[serde(default)]
    pub tls: TlsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

/// TLS material locations. The server refuses to start without both files.
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    #[serde(default = "TlsConfig::default_cert_path")]
    pub cert_path: String,
    #[serde(default = "TlsConfig::default_key_path")]
    pub key_path: String,
}

impl TlsConfig {
    fn default_cert_path() -> String {
        DEFAULT_CERT_PATH.to_string()
    }

    fn default_key_path() -> String {
        DEFAULT_KEY_PATH.to_string()
    }
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: Self::default_cert_path(),
            key_path: Self::default_key_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file and apply the `PORT` env override.
    ///
    /// A missing config file is not an error: the defaults describe a complete
    /// deployment on their own. An unreadable or malformed file is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        config.apply_port_override(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        Ok(config)
    }

    /// Apply the `PORT` environment variable, which takes precedence over both
    /// the config file and the built-in default.
    fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = port {
            self.http.port = raw.parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "Invalid {} value '{}': expected a port number (1-65535)",
                    PORT_ENV_VAR, raw
                ))
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
