use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Authority-tree source files
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Domain list: one fully-qualified dotted name per line
    #[serde(default)]
    pub domains_file: Option<PathBuf>,

    /// Resource record list, one record per line
    #[serde(default)]
    pub records_file: Option<PathBuf>,
}
