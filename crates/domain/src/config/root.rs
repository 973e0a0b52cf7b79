use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::{RecordsConfig, ResponderProfile};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-mockdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-mockdns/config.toml";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for Ferrous MockDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (address, transports)
    #[serde(default)]
    pub server: ServerConfig,

    /// Record file configuration
    #[serde(default)]
    pub records: RecordsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mockdns.toml in current directory
    /// 3. /etc/ferrous-mockdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.records_path {
            self.records.path = path;
        }
        if let Some(tcp) = overrides.tcp {
            self.server.tcp = tcp;
        }
        if let Some(udp) = overrides.udp {
            self.server.udp = udp;
        }
        if let Some(listen) = overrides.listen_address {
            self.server.listen_address = listen;
        }
        if let Some(auto_reload) = overrides.auto_reload {
            self.records.auto_reload = auto_reload;
        }
        if let Some(profile) = overrides.profile {
            self.records.profile = profile;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr().map_err(ConfigError::Validation)?;

        if self.records.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Record file path cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// True when at least one listener will be started.
    pub fn has_listeners(&self) -> bool {
        self.server.udp || self.server.tcp
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub records_path: Option<String>,
    pub tcp: Option<bool>,
    pub udp: Option<bool>,
    pub listen_address: Option<String>,
    pub auto_reload: Option<bool>,
    pub profile: Option<ResponderProfile>,
    pub log_level: Option<String>,
}
