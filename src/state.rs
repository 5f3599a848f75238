//! Application state management for SwiftFolder
//!
//! The central [`AppState`] owns the folder list, the undo/redo history, the
//! current selection, and UI state — no ambient globals. Every mutation here
//! pairs the list operation with its history record, and reports non-fatal
//! outcomes as [`Notice`]s for the UI layer to surface.

use crate::error::{Error, Result};
use crate::folders::{FolderList, History};
use crate::store;
use log::{debug, info};
use std::collections::BTreeSet;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

/// A non-fatal, user-facing outcome of an operation.
///
/// `Info` becomes a toast; `Error` becomes the modal. None of these abort
/// the application and none are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Notice::Info(message.into())
    }

    fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// UI-related state flags.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporary toast message (shown in the status row)
    pub toast_message: Option<String>,
    /// When the toast message should expire (as seconds since app start)
    pub toast_expires_at: Option<f64>,
    /// Whether to show the error modal
    pub show_error_modal: bool,
    /// Error message for the modal
    pub error_message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
#[derive(Debug, Default)]
pub struct AppState {
    /// The folder list, in display order
    pub folders: FolderList,
    /// Undo/redo history (in-memory only, never persisted)
    pub history: History,
    /// Indices of the currently selected list rows
    pub selected: BTreeSet<usize>,
    /// "Open folders in the same window" checkbox. Accepted but inert; the
    /// OS-open commands cannot reuse a window.
    pub same_window: bool,
    /// UI-related state
    pub ui: UiState,
}

impl AppState {
    /// Create the state with the folder list loaded from the persisted store.
    ///
    /// The history always starts empty; it does not survive sessions.
    pub fn new() -> Self {
        let folders = FolderList::from_entries(store::load_folders());
        info!("AppState initialized with {} folder(s)", folders.len());

        Self {
            folders,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a folder path to the list.
    pub fn add_folder(&mut self, path: impl Into<String>) -> Notice {
        let path = path.into();
        debug!("Adding folder: {}", path);
        let action = self.folders.add(path.clone());
        self.history.record(action);
        Notice::info(format!("Added: {}", path))
    }

    /// Remove the selected entries, highest index first.
    pub fn remove_selected(&mut self) -> Notice {
        if self.selected.is_empty() {
            return Notice::info("Select at least one folder to remove.");
        }

        let actions = self.folders.remove_at(&self.selected);
        let removed = actions.len();
        for action in actions {
            self.history.record(action);
        }
        self.selected.clear();
        Notice::info(format!("Removed {} folder(s)", removed))
    }

    /// Replace the single selected entry with `new_path`.
    pub fn replace_selected(&mut self, new_path: impl Into<String>) -> Notice {
        let Some(&index) = self.single_selection() else {
            return Notice::info("Select exactly one folder to replace.");
        };

        match self.folders.replace_at(index, new_path) {
            Some(action) => {
                self.history.record(action);
                Notice::info("Folder replaced")
            }
            None => Notice::error("The selected folder is no longer in the list"),
        }
    }

    /// Empty the list, snapshotting it for undo.
    pub fn clear_all(&mut self) -> Notice {
        match self.folders.clear() {
            Some(action) => {
                self.history.record(action);
                self.selected.clear();
                Notice::info("List cleared")
            }
            None => Notice::info("The list is already empty."),
        }
    }

    /// Confirm an edit from the edit dialog.
    ///
    /// Validates that `new_path` exists on disk, then re-resolves `old_path`
    /// by value in the current list (the dialog may have been open while the
    /// list changed underneath it). Errors are returned for inline display
    /// in the dialog; the list is unchanged on failure.
    pub fn edit_entry(&mut self, old_path: &str, new_path: impl Into<String>) -> Result<()> {
        let new_path = new_path.into();
        if !Path::new(&new_path).exists() {
            return Err(Error::FolderMissing(new_path.into()));
        }

        let action = self.folders.replace_by_value(old_path, new_path)?;
        self.history.record(action);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Undo / Redo
    // ─────────────────────────────────────────────────────────────────────────

    /// Undo the most recent action.
    pub fn undo(&mut self) -> Notice {
        match self.history.undo(&mut self.folders) {
            Ok(None) => Notice::info("Nothing to undo"),
            Ok(Some(action)) => {
                self.selected.clear();
                Notice::info(format!("Undid {}", action.kind()))
            }
            Err(e) => Notice::error(e.to_string()),
        }
    }

    /// Redo the most recently undone action.
    pub fn redo(&mut self) -> Notice {
        match self.history.redo(&mut self.folders) {
            Ok(None) => Notice::info("Nothing to redo"),
            Ok(Some(action)) => {
                self.selected.clear();
                Notice::info(format!("Redid {}", action.kind()))
            }
            Err(e) => Notice::error(e.to_string()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Select only `index`.
    pub fn select_single(&mut self, index: usize) {
        self.selected.clear();
        self.selected.insert(index);
    }

    /// Toggle `index` in the selection (ctrl-click).
    pub fn toggle_selected(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// The selected index if exactly one row is selected.
    fn single_selection(&self) -> Option<&usize> {
        if self.selected.len() == 1 {
            self.selected.iter().next()
        } else {
            None
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toasts and error modal
    // ─────────────────────────────────────────────────────────────────────────

    /// Show an error in a modal dialog.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.show_error_modal = true;
    }

    /// Dismiss the error modal.
    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_message.clear();
    }

    /// Show a temporary toast message (disappears after duration).
    ///
    /// `current_time` should be the current app time in seconds.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Clear expired toasts. Call each frame with the current time.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }

    /// Route a notice to the toast or the error modal.
    pub fn report(&mut self, notice: Notice, current_time: f64) {
        match notice {
            Notice::Info(message) => self.show_toast(message, current_time, 2.5),
            Notice::Error(message) => self.show_error(message),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shutdown
    // ─────────────────────────────────────────────────────────────────────────

    /// Persist the folder list on exit. Best effort; history is not saved.
    pub fn shutdown(&self) {
        store::save_folders_silent(self.folders.entries());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_with(entries: &[&str]) -> AppState {
        AppState {
            folders: FolderList::from_entries(entries.iter().map(|s| s.to_string()).collect()),
            ..AppState::default()
        }
    }

    #[test]
    fn test_add_folder_records_history() {
        let mut state = AppState::default();
        let notice = state.add_folder("/tmp/a");
        assert_eq!(state.folders.entries(), &["/tmp/a"]);
        assert!(state.history.can_undo());
        assert_eq!(notice, Notice::Info("Added: /tmp/a".to_string()));
    }

    #[test]
    fn test_remove_selected_requires_selection() {
        let mut state = state_with(&["A"]);
        let notice = state.remove_selected();
        assert_eq!(
            notice,
            Notice::Info("Select at least one folder to remove.".to_string())
        );
        assert_eq!(state.folders.entries(), &["A"]);
        assert!(!state.history.can_undo());
    }

    #[test]
    fn test_remove_selected_high_to_low_and_clears_selection() {
        let mut state = state_with(&["A", "B", "C"]);
        state.toggle_selected(0);
        state.toggle_selected(2);

        let notice = state.remove_selected();
        assert_eq!(state.folders.entries(), &["B"]);
        assert!(state.selected.is_empty());
        assert_eq!(notice, Notice::Info("Removed 2 folder(s)".to_string()));

        // Two records were pushed (C first, then A): two undos restore both.
        state.undo();
        assert_eq!(state.folders.entries(), &["B", "A"]);
        state.undo();
        assert_eq!(state.folders.entries(), &["B", "A", "C"]);
    }

    #[test]
    fn test_replace_selected_requires_exactly_one() {
        let mut state = state_with(&["A", "B"]);
        assert_eq!(
            state.replace_selected("X"),
            Notice::Info("Select exactly one folder to replace.".to_string())
        );

        state.toggle_selected(0);
        state.toggle_selected(1);
        assert_eq!(
            state.replace_selected("X"),
            Notice::Info("Select exactly one folder to replace.".to_string())
        );
        assert_eq!(state.folders.entries(), &["A", "B"]);
    }

    #[test]
    fn test_replace_selected_replaces_and_records() {
        let mut state = state_with(&["A", "B"]);
        state.select_single(1);
        state.replace_selected("X");
        assert_eq!(state.folders.entries(), &["A", "X"]);

        state.undo();
        assert_eq!(state.folders.entries(), &["A", "B"]);
    }

    #[test]
    fn test_clear_all_and_notice_when_empty() {
        let mut state = state_with(&["A"]);
        assert_eq!(state.clear_all(), Notice::Info("List cleared".to_string()));
        assert!(state.folders.is_empty());

        assert_eq!(
            state.clear_all(),
            Notice::Info("The list is already empty.".to_string())
        );
    }

    #[test]
    fn test_edit_entry_rejects_missing_target_folder() {
        let mut state = state_with(&["A"]);
        let err = state.edit_entry("A", "/no/such/folder").unwrap_err();
        assert!(matches!(err, Error::FolderMissing(_)));
        assert_eq!(state.folders.entries(), &["A"]);
    }

    #[test]
    fn test_edit_entry_rejects_stale_original() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().display().to_string();

        let mut state = state_with(&["A"]);
        let err = state.edit_entry("gone", real.as_str()).unwrap_err();
        assert!(matches!(err, Error::StaleEntry(_)));
        assert_eq!(state.folders.entries(), &["A"]);
    }

    #[test]
    fn test_edit_entry_replaces_by_value() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().display().to_string();

        let mut state = state_with(&["A", "B"]);
        state.edit_entry("B", real.as_str()).unwrap();
        assert_eq!(state.folders.entries(), &["A", real.as_str()]);

        state.undo();
        assert_eq!(state.folders.entries(), &["A", "B"]);
    }

    #[test]
    fn test_undo_redo_notices() {
        let mut state = AppState::default();
        assert_eq!(state.undo(), Notice::Info("Nothing to undo".to_string()));
        assert_eq!(state.redo(), Notice::Info("Nothing to redo".to_string()));

        state.add_folder("/tmp/a");
        assert_eq!(state.undo(), Notice::Info("Undid add".to_string()));
        assert_eq!(state.redo(), Notice::Info("Redid add".to_string()));
    }

    #[test]
    fn test_mutation_after_undo_drops_redo() {
        let mut state = AppState::default();
        state.add_folder("x");
        state.undo();
        state.add_folder("y");

        assert_eq!(state.redo(), Notice::Info("Nothing to redo".to_string()));
        assert_eq!(state.folders.entries(), &["y"]);
    }

    #[test]
    fn test_toggle_and_single_selection() {
        let mut state = state_with(&["A", "B"]);
        state.toggle_selected(0);
        state.toggle_selected(1);
        assert!(state.is_selected(0) && state.is_selected(1));

        state.toggle_selected(0);
        assert!(!state.is_selected(0));

        state.select_single(0);
        assert!(state.is_selected(0) && !state.is_selected(1));
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut state = AppState::default();
        state.show_toast("hello", 10.0, 2.0);
        assert_eq!(state.ui.toast_message.as_deref(), Some("hello"));

        state.update_toast(11.0);
        assert!(state.ui.toast_message.is_some());

        state.update_toast(12.5);
        assert!(state.ui.toast_message.is_none());
    }

    #[test]
    fn test_report_routes_errors_to_modal() {
        let mut state = AppState::default();
        state.report(Notice::Error("bad".to_string()), 0.0);
        assert!(state.ui.show_error_modal);
        assert_eq!(state.ui.error_message, "bad");

        state.dismiss_error();
        assert!(!state.ui.show_error_modal);
    }
}
