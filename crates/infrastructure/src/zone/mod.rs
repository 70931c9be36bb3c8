pub mod loader;
pub mod tree;

pub use loader::{load_domains, load_records, parse_domains, parse_records};
pub use tree::{NodeId, ZoneTree};
