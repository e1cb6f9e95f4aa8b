pub mod analyze;
pub mod config;
pub mod recommend;
pub mod validate;

use std::io::Read;
use std::path::Path;

use mindful_core::{parse_sessions, SessionRecord};

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()).into())
    }
}

/// Parse a JSON array of session records.
pub fn load_sessions(path: &Path) -> Result<Vec<SessionRecord>, Box<dyn std::error::Error>> {
    let content = read_input(path)?;
    let sessions = parse_sessions(&content)?;
    tracing::debug!("loaded {} sessions from {}", sessions.len(), path.display());
    Ok(sessions)
}
