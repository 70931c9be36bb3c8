pub mod client;
pub mod engine;
pub mod transcript;

pub use client::Resolver;
pub use engine::{ResolutionEngine, DEFAULT_HOP_LIMIT};
pub use transcript::write_transcript;
