//! HTTP Server Configuration
//!
//! Host, port, CORS, and the behavioural switches of the course API.
//! Every field has a default, so an empty JSON object is a valid config.

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::courses::IdStrategy;
use crate::observability::Severity;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// How ids are assigned to created courses (default: uuid)
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Reject malformed bodies with 400 and misses with 404 instead of the
    /// lenient 200 responses (default: false)
    #[serde(default)]
    pub strict_mode: bool,

    /// Start with the two fixture courses (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Minimum log severity (default: "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_seed() -> bool {
    true
}

fn default_log_level() -> String {
    Severity::Info.as_str().to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            id_strategy: IdStrategy::default(),
            strict_mode: false,
            seed: default_seed(),
            log_level: default_log_level(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if let Some(origin) = self.invalid_cors_origins().first() {
            return Err(ConfigError::Invalid(format!(
                "cors origin {:?} is not a valid header value",
                origin
            )));
        }
        self.severity()?;
        Ok(())
    }

    /// `cors_origins` entries that cannot be sent as an
    /// `Access-Control-Allow-Origin` value
    pub fn invalid_cors_origins(&self) -> Vec<&str> {
        self.cors_origins
            .iter()
            .filter(|origin| origin.parse::<HeaderValue>().is_err())
            .map(String::as_str)
            .collect()
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        self.log_level.parse().map_err(ConfigError::Invalid)
    }

    /// Get the socket address string.
    ///
    /// IP literals are rendered through `SocketAddr`, so IPv6 hosts come out
    /// bracketed (`[::1]:8000`). Host names are left for the resolver.
    pub fn socket_addr(&self) -> String {
        match self.host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}
