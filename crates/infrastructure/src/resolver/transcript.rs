//! Thin collaborator that writes a resolution trace to disk for human
//! inspection. The trace content is produced by the engine; nothing here
//! is load-bearing for resolution itself.

use std::fs;
use std::path::{Path, PathBuf};

use ironwood_dns_domain::DomainError;

/// Transcript files are named `dt_search_<name-without-dots>.txt`.
pub const TRANSCRIPT_PREFIX: &str = "dt_search_";

/// Writes the trace lines of one resolution attempt under `dir`,
/// creating the directory if needed. Returns the path written.
pub fn write_transcript(dir: &Path, name: &str, lines: &[String]) -> Result<PathBuf, DomainError> {
    fs::create_dir_all(dir).map_err(|e| DomainError::Io(e.to_string()))?;

    let file = format!("{TRANSCRIPT_PREFIX}{}.txt", name.replace('.', ""));
    let path = dir.join(file);

    let mut text = String::new();
    text.push_str(&format!("Resolution transcript for '{name}'\n"));
    text.push_str("---------------------------------------------------\n");
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }

    fs::write(&path, text).map_err(|e| DomainError::Io(e.to_string()))?;
    Ok(path)
}
