//! Ironwood DNS Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::HostResolver;
pub use use_cases::{HostResolution, ResolveHostUseCase};
