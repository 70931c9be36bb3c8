pub mod resolve_host;

pub use resolve_host::{HostResolution, ResolveHostUseCase};
