use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{0}': {1}")]
    Read(String, String),

    #[error("Cannot parse config file '{0}': {1}")]
    Parse(String, String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
