use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::{ConfigError, LoggingConfig, ResolverConfig, ZoneConfig};

/// Main configuration, loaded from a TOML file with CLI overrides applied
/// on top. Every section has defaults so a missing file is not an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub zone: ZoneConfig,
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub domains_file: Option<PathBuf>,
    pub records_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub hop_limit: Option<usize>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| ConfigError::Read(path.to_string(), e.to_string()))?;
                toml::from_str(&text)
                    .map_err(|e| ConfigError::Parse(path.to_string(), e.to_string()))?
            }
            None => Config::default(),
        };

        if let Some(domains_file) = overrides.domains_file {
            config.zone.domains_file = Some(domains_file);
        }
        if let Some(records_file) = overrides.records_file {
            config.zone.records_file = Some(records_file);
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = level;
        }
        if let Some(hop_limit) = overrides.hop_limit {
            config.resolver.hop_limit = hop_limit;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.hop_limit == 0 {
            return Err(ConfigError::Invalid(
                "resolver.hop_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
