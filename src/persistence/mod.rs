//! Save/load persistence
//!
//! Features:
//! - Plain JSON documents (no envelope or versioning)
//! - Atomic replace (write tmp, then rename over the save)
//! - Missing or corrupt files degrade to `None` so callers fall back to defaults

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a JSON document. Missing, unreadable or corrupt files yield `None`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No save at {}, starting fresh", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt save {}: {}", path.display(), e);
            None
        }
    }
}

/// Write a JSON document, replacing any previous save in one step
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
