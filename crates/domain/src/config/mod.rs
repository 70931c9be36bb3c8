//! Configuration for the resolution simulator, organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `zone`: authority-tree source files
//! - `resolver`: resolution engine settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use zone::ZoneConfig;
