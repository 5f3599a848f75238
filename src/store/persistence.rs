//! Folder list persistence for SwiftFolder
//!
//! The list is stored as a plain JSON array of path strings — no versioning,
//! no schema tag — and the round-trip is exact and order-preserving,
//! duplicates included. A missing file means a fresh start; a corrupt file is
//! recoverable and falls back to an empty list with a warning.

use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "swiftfolder";

/// Folder list file name
const STORE_FILE_NAME: &str = "folder_list.json";

/// Backup file name (used during atomic writes)
const STORE_BACKUP_NAME: &str = "folder_list.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\swiftfolder\`
/// - **macOS**: `~/Library/Application Support/swiftfolder/`
/// - **Linux**: `~/.config/swiftfolder/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be
/// determined (e.g., if the HOME environment variable is not set).
pub fn get_store_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the folder list file.
pub fn get_store_file_path() -> Result<PathBuf> {
    Ok(get_store_dir()?.join(STORE_FILE_NAME))
}

/// Ensure the store directory exists, creating it if necessary.
fn ensure_store_dir() -> Result<PathBuf> {
    let store_dir = get_store_dir()?;

    if !store_dir.exists() {
        debug!("Creating store directory: {}", store_dir.display());
        fs::create_dir_all(&store_dir).map_err(|e| Error::StoreSave {
            path: store_dir.clone(),
            source: Box::new(e),
        })?;
    }

    Ok(store_dir)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load
// ─────────────────────────────────────────────────────────────────────────────

/// Load the folder list from the default store location.
///
/// Always returns a usable list:
/// 1. File exists and is a valid JSON array of strings → its contents
/// 2. File absent → empty list (informational, not an error)
/// 3. File corrupt → warning, empty list
pub fn load_folders() -> Vec<String> {
    load_folders_internal().unwrap_or_warn_default(Vec::new(), "Failed to load folder list")
}

fn load_folders_internal() -> Result<Vec<String>> {
    let store_path = get_store_file_path()?;
    load_folders_from(&store_path)
}

/// Load the folder list from an explicit path. Missing file → empty list.
pub fn load_folders_from(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        info!(
            "Folder list file not found at {}, starting empty",
            path.display()
        );
        return Ok(Vec::new());
    }

    debug!("Loading folder list from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| Error::StoreLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    // Handle empty file
    if contents.trim().is_empty() {
        debug!("Folder list file is empty, starting empty");
        return Ok(Vec::new());
    }

    let folders: Vec<String> = serde_json::from_str(&contents).map_err(|e| {
        warn!(
            "Folder list file at {} contains invalid JSON: {}",
            path.display(),
            e
        );
        Error::StoreParse {
            message: format!("Failed to parse folder list file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Loaded {} folder(s) from {}",
        folders.len(),
        path.display()
    );
    Ok(folders)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────────────────────────

/// Save the folder list to the default store location.
///
/// Performs an atomic write by writing to a backup file first and then
/// renaming it over the original. Overwrites unconditionally.
pub fn save_folders(folders: &[String]) -> Result<()> {
    let store_dir = ensure_store_dir()?;
    let store_path = store_dir.join(STORE_FILE_NAME);
    let backup_path = store_dir.join(STORE_BACKUP_NAME);

    save_folders_to(folders, &store_path, &backup_path)
}

/// Save the folder list to an explicit path, staging through `backup_path`.
pub fn save_folders_to(folders: &[String], path: &Path, backup_path: &Path) -> Result<()> {
    debug!("Saving folder list to: {}", path.display());

    let json = serde_json::to_string_pretty(folders).map_err(|e| Error::StoreSave {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    // Write to backup file first (atomic write pattern)
    fs::write(backup_path, &json).map_err(|e| Error::StoreSave {
        path: backup_path.to_path_buf(),
        source: Box::new(e),
    })?;

    // Replace original with backup
    fs::rename(backup_path, path).map_err(|e| Error::StoreSave {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    info!(
        "Saved {} folder(s) to {}",
        folders.len(),
        path.display()
    );
    Ok(())
}

/// Save the folder list, ignoring errors.
///
/// Best-effort save for application exit; failure is logged, not raised.
/// Returns `true` if the save succeeded.
pub fn save_folders_silent(folders: &[String]) -> bool {
    match save_folders(folders) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save folder list: {}", e);
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Helper holding a temporary store directory.
    struct TestEnv {
        _temp_dir: TempDir,
        store_file: PathBuf,
        backup_file: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let store_file = temp_dir.path().join(STORE_FILE_NAME);
            let backup_file = temp_dir.path().join(STORE_BACKUP_NAME);
            Self {
                _temp_dir: temp_dir,
                store_file,
                backup_file,
            }
        }

        fn write_store(&self, content: &str) {
            fs::write(&self.store_file, content).expect("Failed to write store file");
        }

        fn save(&self, folders: &[String]) {
            save_folders_to(folders, &self.store_file, &self.backup_file)
                .expect("Failed to save folder list");
        }

        fn load(&self) -> Result<Vec<String>> {
            load_folders_from(&self.store_file)
        }
    }

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_store_file_path() {
        let result = get_store_file_path();
        assert!(result.is_ok());

        let path = result.unwrap();
        assert!(path.to_string_lossy().contains(APP_NAME));
        assert!(path.to_string_lossy().contains(STORE_FILE_NAME));
    }

    #[test]
    fn test_roundtrip_empty_list() {
        let env = TestEnv::new();
        env.save(&[]);
        assert_eq!(env.load().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_roundtrip_single_entry() {
        let env = TestEnv::new();
        let folders = entries(&["/home/y/projects"]);
        env.save(&folders);
        assert_eq!(env.load().unwrap(), folders);
    }

    #[test]
    fn test_roundtrip_preserves_duplicates_and_order() {
        let env = TestEnv::new();
        let folders = entries(&[
            r"C:\Users\x\Documents",
            "/home/y/projects",
            "/home/y/projects",
            "/tmp",
        ]);
        env.save(&folders);
        assert_eq!(env.load().unwrap(), folders);
    }

    #[test]
    fn test_save_overwrites_unconditionally() {
        let env = TestEnv::new();
        env.save(&entries(&["/a", "/b"]));
        env.save(&entries(&["/c"]));
        assert_eq!(env.load().unwrap(), entries(&["/c"]));
    }

    #[test]
    fn test_save_removes_backup_file() {
        let env = TestEnv::new();
        env.save(&entries(&["/a"]));
        assert!(!env.backup_file.exists());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let env = TestEnv::new();
        assert_eq!(env.load().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_load_empty_file_is_empty() {
        let env = TestEnv::new();
        env.write_store("");
        assert_eq!(env.load().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_load_corrupt_json_is_parse_error() {
        let env = TestEnv::new();
        env.write_store("{ not json ]");
        let err = env.load().unwrap_err();
        assert!(matches!(err, Error::StoreParse { .. }));
    }

    #[test]
    fn test_load_wrong_shape_is_parse_error() {
        let env = TestEnv::new();
        // Valid JSON but not an array of strings.
        env.write_store(r#"{"folders": ["/a"]}"#);
        assert!(matches!(
            env.load().unwrap_err(),
            Error::StoreParse { .. }
        ));

        env.write_store("[1, 2, 3]");
        assert!(matches!(
            env.load().unwrap_err(),
            Error::StoreParse { .. }
        ));
    }

    #[test]
    fn test_load_folders_graceful_fallback() {
        // Public API never fails; worst case is an empty list.
        let folders = load_folders();
        let _ = folders.len();
    }

    #[test]
    fn test_store_file_name_constant() {
        assert_eq!(STORE_FILE_NAME, "folder_list.json");
    }
}
