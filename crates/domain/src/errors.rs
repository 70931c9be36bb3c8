use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("No zone loaded: {0}")]
    MissingZone(String),
}
