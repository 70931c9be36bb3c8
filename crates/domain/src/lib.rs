//! Ironwood DNS Domain Layer
pub mod config;
pub mod errors;
pub mod handle;
pub mod message;
pub mod name;
pub mod record;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use handle::{RequestHandle, ResponseHandle};
pub use message::{Message, QueryMethod, Question, Response};
pub use name::canonical_name;
pub use record::{RecordType, ResourceRecord, NOT_FOUND_RDATA};
