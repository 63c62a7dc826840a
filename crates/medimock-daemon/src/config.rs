// crates/medimock-daemon/src/config.rs
//
// Runtime configuration for the MediMock daemon.
// Loaded from a TOML file or populated with defaults, then overridden by
// CLI flags and environment variables.

use serde::Deserialize;
use std::fs;

use medimock_core::fixtures::{DEFAULT_HOST, DEFAULT_PORT};
use medimock_core::MockError;
use medimock_rpc::RpcConfig;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DaemonConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for reproducible /verify responses. Unset means fresh randomness.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            seed: None,
        }
    }
}

/// Values supplied on the command line or through the environment.
/// Any field left `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub seed: Option<u64>,
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, MockError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, MockError> {
        toml::from_str(contents).map_err(|e| MockError::Config(e.to_string()))
    }

    /// Apply CLI/env overrides on top of this config.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Server configuration derived from this config.
    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            host: self.host.clone(),
            port: self.port,
            seed: self.seed,
        }
    }
}
