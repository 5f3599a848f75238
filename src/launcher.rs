//! Opening folders in the system file browser.
//!
//! Each existing path is dispatched to the OS-native folder-open mechanism
//! via the `open` crate (Explorer on Windows, Finder on macOS, xdg-open on
//! Linux). Missing folders are non-fatal: each one is reported and the run
//! continues with the remaining paths.

use log::{info, warn};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Outcome of a launch run, for toast or console reporting.
#[derive(Debug, Default)]
pub struct LaunchReport {
    /// Number of folders successfully handed to the OS.
    pub opened: usize,
    /// Paths that do not exist on disk (normalized form).
    pub missing: Vec<PathBuf>,
    /// Paths the OS-open invocation failed for, with the error text.
    pub failed: Vec<(PathBuf, String)>,
}

impl LaunchReport {
    /// Whether every path was opened without incident.
    pub fn all_ok(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }

    /// One-line summary for the status toast.
    pub fn summary(&self) -> String {
        if self.all_ok() {
            format!("Opened {} folder(s)", self.opened)
        } else {
            format!(
                "Opened {} folder(s), {} missing, {} failed",
                self.opened,
                self.missing.len(),
                self.failed.len()
            )
        }
    }
}

/// Open every folder in `paths` in the system file browser.
///
/// `same_window` is accepted but has no effect: the underlying OS commands
/// offer no way to reuse a window, so each folder always opens as its own
/// window/process. The flag is kept so the UI checkbox has somewhere to go.
pub fn open_folders(paths: &[String], same_window: bool) -> LaunchReport {
    let _ = same_window;
    open_folders_with(paths, |path| open::that(path))
}

/// Launch loop with an injectable open function.
pub(crate) fn open_folders_with<F>(paths: &[String], mut launch: F) -> LaunchReport
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut report = LaunchReport::default();

    for path in paths {
        let folder = normalize_path(path);
        if !folder.exists() {
            warn!("The folder {} does not exist, skipping", folder.display());
            report.missing.push(folder);
            continue;
        }
        match launch(&folder) {
            Ok(()) => {
                info!("Opened folder: {}", folder.display());
                report.opened += 1;
            }
            Err(e) => {
                warn!("Failed to open {}: {}", folder.display(), e);
                report.failed.push((folder, e.to_string()));
            }
        }
    }

    report
}

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// preceding normal components. No filesystem access, no symlink resolution.
fn normalize_path(path: &str) -> PathBuf {
    let mut out = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
