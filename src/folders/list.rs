//! The ordered folder list and its action records.
//!
//! Every mutation returns the [`Action`] record(s) it produced so the caller
//! can feed them into the [`History`](crate::folders::History). Duplicate
//! paths are permitted; insertion order is display order.

use crate::error::{Error, Result};
use std::collections::BTreeSet;

// ─────────────────────────────────────────────────────────────────────────────
// Action Records
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded description of a list mutation, sufficient to compute its
/// inverse (undo) and its reapplication (redo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A path was appended at the end of the list.
    Add(String),
    /// A path was removed from the list.
    Remove(String),
    /// An entry was replaced in place.
    Replace { old: String, new: String },
    /// The whole list was emptied; the snapshot holds the prior contents in order.
    Clear(Vec<String>),
}

impl Action {
    /// Short lowercase label for toast messages ("Undid add" etc).
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Remove(_) => "remove",
            Action::Replace { .. } => "replace",
            Action::Clear(_) => "clear",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Folder List
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered sequence of folder path entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderList {
    entries: Vec<String>,
}

impl FolderList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from already-persisted entries.
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Append `path` at the end. Always succeeds; no existence check here.
    pub fn add(&mut self, path: impl Into<String>) -> Action {
        let path = path.into();
        self.entries.push(path.clone());
        Action::Add(path)
    }

    /// Remove the entries at the given positions.
    ///
    /// Indices are processed from highest to lowest so earlier removals do
    /// not shift the positions of later ones. Returns one `Remove` record per
    /// removed entry, in removal order. Out-of-range indices are skipped; an
    /// empty set is a no-op (the caller reports the notice).
    pub fn remove_at(&mut self, indices: &BTreeSet<usize>) -> Vec<Action> {
        let mut actions = Vec::new();
        for &index in indices.iter().rev() {
            if index < self.entries.len() {
                let removed = self.entries.remove(index);
                actions.push(Action::Remove(removed));
            }
        }
        actions
    }

    /// Replace the entry at `index` with `new`. Returns `None` if out of range.
    pub fn replace_at(&mut self, index: usize, new: impl Into<String>) -> Option<Action> {
        let slot = self.entries.get_mut(index)?;
        let new = new.into();
        let old = std::mem::replace(slot, new.clone());
        Some(Action::Replace { old, new })
    }

    /// Empty the list, snapshotting its contents. `None` when already empty.
    pub fn clear(&mut self) -> Option<Action> {
        if self.entries.is_empty() {
            return None;
        }
        let snapshot = std::mem::take(&mut self.entries);
        Some(Action::Clear(snapshot))
    }

    /// Replace the first entry equal to `old` with `new`.
    ///
    /// The edit dialog captures the old path at open time and re-resolves it
    /// by value at confirm time, so the target can have disappeared (or, with
    /// duplicates, a different occurrence may be hit). A missing value is a
    /// stale reference and the list is left unchanged.
    pub fn replace_by_value(&mut self, old: &str, new: impl Into<String>) -> Result<Action> {
        let index = self
            .position_of(old)
            .ok_or_else(|| Error::StaleEntry(old.to_string()))?;
        let new = new.into();
        self.entries[index] = new.clone();
        Ok(Action::Replace {
            old: old.to_string(),
            new,
        })
    }

    /// Index of the first entry equal to `value`.
    pub(crate) fn position_of(&self, value: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == value)
    }

    // Raw mutators used by undo/redo application. These do NOT produce
    // action records.

    pub(crate) fn append_raw(&mut self, path: String) {
        self.entries.push(path);
    }

    pub(crate) fn remove_first_raw(&mut self, value: &str) -> bool {
        match self.position_of(value) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn replace_first_raw(&mut self, from: &str, to: String) -> bool {
        match self.position_of(from) {
            Some(index) => {
                self.entries[index] = to;
                true
            }
            None => false,
        }
    }

    pub(crate) fn restore_raw(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> FolderList {
        FolderList::from_entries(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_add_appends_and_records() {
        let mut folders = FolderList::new();
        let action = folders.add("/tmp/a");
        assert_eq!(folders.entries(), &["/tmp/a"]);
        assert_eq!(action, Action::Add("/tmp/a".to_string()));
    }

    #[test]
    fn test_add_permits_duplicates() {
        let mut folders = FolderList::new();
        folders.add("/tmp/a");
        folders.add("/tmp/a");
        assert_eq!(folders.len(), 2);
    }

    #[test]
    fn test_remove_at_high_to_low() {
        // {0, 2} on [A, B, C] must yield [B] with records C then A.
        let mut folders = list(&["A", "B", "C"]);
        let indices: BTreeSet<usize> = [0, 2].into_iter().collect();
        let actions = folders.remove_at(&indices);

        assert_eq!(folders.entries(), &["B"]);
        assert_eq!(
            actions,
            vec![
                Action::Remove("C".to_string()),
                Action::Remove("A".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_at_empty_selection_is_noop() {
        let mut folders = list(&["A"]);
        let actions = folders.remove_at(&BTreeSet::new());
        assert!(actions.is_empty());
        assert_eq!(folders.entries(), &["A"]);
    }

    #[test]
    fn test_remove_at_skips_out_of_range() {
        let mut folders = list(&["A", "B"]);
        let indices: BTreeSet<usize> = [1, 5].into_iter().collect();
        let actions = folders.remove_at(&indices);
        assert_eq!(actions, vec![Action::Remove("B".to_string())]);
        assert_eq!(folders.entries(), &["A"]);
    }

    #[test]
    fn test_replace_at() {
        let mut folders = list(&["A", "B"]);
        let action = folders.replace_at(1, "X");
        assert_eq!(folders.entries(), &["A", "X"]);
        assert_eq!(
            action,
            Some(Action::Replace {
                old: "B".to_string(),
                new: "X".to_string(),
            })
        );
    }

    #[test]
    fn test_replace_at_out_of_range() {
        let mut folders = list(&["A"]);
        assert!(folders.replace_at(3, "X").is_none());
        assert_eq!(folders.entries(), &["A"]);
    }

    #[test]
    fn test_clear_snapshots_contents() {
        let mut folders = list(&["A", "B"]);
        let action = folders.clear();
        assert!(folders.is_empty());
        assert_eq!(
            action,
            Some(Action::Clear(vec!["A".to_string(), "B".to_string()]))
        );
    }

    #[test]
    fn test_clear_on_empty_is_none() {
        let mut folders = FolderList::new();
        assert!(folders.clear().is_none());
    }

    #[test]
    fn test_replace_by_value_first_match() {
        let mut folders = list(&["A", "B", "A"]);
        let action = folders.replace_by_value("A", "X").unwrap();
        assert_eq!(folders.entries(), &["X", "B", "A"]);
        assert_eq!(
            action,
            Action::Replace {
                old: "A".to_string(),
                new: "X".to_string(),
            }
        );
    }

    #[test]
    fn test_replace_by_value_stale() {
        let mut folders = list(&["A"]);
        let err = folders.replace_by_value("missing", "X").unwrap_err();
        assert!(matches!(err, Error::StaleEntry(_)));
        assert_eq!(folders.entries(), &["A"]);
    }
}
