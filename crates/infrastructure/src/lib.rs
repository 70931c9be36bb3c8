//! Ironwood DNS Infrastructure Layer
//!
//! Concrete authority tree, zone file loaders, resolution engine and the
//! client-facing resolver facade.
pub mod resolver;
pub mod zone;

pub use resolver::{ResolutionEngine, Resolver};
pub use zone::{NodeId, ZoneTree};
