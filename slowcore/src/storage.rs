//! Storage utilities for Slow Computer apps
//!
//! JSON settings files under the per-app config directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Read and parse a JSON file.
///
/// A missing file is reported as [`StorageError::NotFound`] so callers can
/// tell "never saved" apart from a broken file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a value as pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    log::debug!("saved {}", path.display());
    Ok(())
}

/// Get the config directory for Slow Computer apps
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        name: String,
        size: u32,
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("slowcore_storage_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = scratch("missing").join("nope.json");
        match load_json::<Prefs>(&path) {
            Err(StorageError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch("save");
        let path = dir.join("nested").join("prefs.json");
        let prefs = Prefs { name: "board".into(), size: 700 };
        save_json(&path, &prefs).unwrap();
        let back: Prefs = load_json(&path).unwrap();
        assert_eq!(back, prefs);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let dir = scratch("bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_json::<Prefs>(&path), Err(StorageError::Json(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
