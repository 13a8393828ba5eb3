use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{RecipeShareError, Result};

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
    /// Timeout applied by `RecipeClient` when built from this configuration
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_permissive: default_cors_permissive(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_cors_permissive() -> bool {
    true
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl ServerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPESHARE__ prefix
    /// 2. recipeshare.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPESHARE__BIND_ADDR
    pub fn load() -> std::result::Result<Self, ConfigError> {
        load_config("recipeshare")
    }

    /// Parse `bind_addr` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|_| RecipeShareError::InvalidAddress(self.bind_addr.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Load configuration from `<file_stem>.toml` (optional) and `RECIPESHARE__*`
/// environment variables.
pub fn load_config(file_stem: &str) -> std::result::Result<ServerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix("RECIPESHARE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
