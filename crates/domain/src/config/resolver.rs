use serde::{Deserialize, Serialize};

/// Resolution engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Maximum number of authorities a single resolution attempt may
    /// visit before giving up with a not-found result (default: 32).
    /// Bounds cyclic NS delegation chains.
    #[serde(default = "default_hop_limit")]
    pub hop_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            hop_limit: default_hop_limit(),
        }
    }
}

fn default_hop_limit() -> usize {
    32
}
