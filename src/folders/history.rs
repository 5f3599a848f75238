//! Linear undo/redo history over the folder list.
//!
//! Two stacks of [`Action`] records. Recording a new action invalidates the
//! redo branch. Undo applies the inverse of the top record; redo re-applies
//! its forward semantics.
//!
//! Known, deliberate quirks carried from the observed behavior:
//! - Undoing a `Remove` re-appends the path at the END of the list; the
//!   original position is not restored, only membership.
//! - Undo/redo of `Remove` and `Replace` locate their target by value, first
//!   match. With duplicate paths in the list the affected occurrence may not
//!   be the one originally touched.

use crate::error::{Error, Result};
use crate::folders::{Action, FolderList};

/// Undo and redo stacks of recorded actions. Not persisted across sessions.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh mutation: push onto the undo stack and clear the redo
    /// stack entirely. Any new action invalidates the redo branch.
    pub fn record(&mut self, action: Action) {
        self.undo_stack.push(action);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo the most recent action by applying its inverse to `folders`.
    ///
    /// Returns `Ok(None)` when there is nothing to undo, or the undone record
    /// for messaging. A stale value lookup aborts with `Error::StaleEntry`,
    /// leaving both stacks and the list unchanged.
    pub fn undo(&mut self, folders: &mut FolderList) -> Result<Option<Action>> {
        let Some(action) = self.undo_stack.pop() else {
            return Ok(None);
        };

        match apply_inverse(&action, folders) {
            Ok(()) => {
                self.redo_stack.push(action.clone());
                Ok(Some(action))
            }
            Err(err) => {
                self.undo_stack.push(action);
                Err(err)
            }
        }
    }

    /// Redo the most recently undone action by re-applying its forward
    /// semantics to `folders`. Mirror of [`History::undo`].
    pub fn redo(&mut self, folders: &mut FolderList) -> Result<Option<Action>> {
        let Some(action) = self.redo_stack.pop() else {
            return Ok(None);
        };

        match apply_forward(&action, folders) {
            Ok(()) => {
                self.undo_stack.push(action.clone());
                Ok(Some(action))
            }
            Err(err) => {
                self.redo_stack.push(action);
                Err(err)
            }
        }
    }
}

/// Apply the inverse of `action` to the list.
fn apply_inverse(action: &Action, folders: &mut FolderList) -> Result<()> {
    match action {
        Action::Add(path) => {
            if !folders.remove_first_raw(path) {
                return Err(Error::StaleEntry(path.clone()));
            }
        }
        // Membership only; the original index is not restored.
        Action::Remove(path) => folders.append_raw(path.clone()),
        Action::Replace { old, new } => {
            if !folders.replace_first_raw(new, old.clone()) {
                return Err(Error::StaleEntry(new.clone()));
            }
        }
        Action::Clear(snapshot) => folders.restore_raw(snapshot.clone()),
    }
    Ok(())
}

/// Re-apply the forward semantics of `action` to the list.
fn apply_forward(action: &Action, folders: &mut FolderList) -> Result<()> {
    match action {
        Action::Add(path) => folders.append_raw(path.clone()),
        Action::Remove(path) => {
            if !folders.remove_first_raw(path) {
                return Err(Error::StaleEntry(path.clone()));
            }
        }
        Action::Replace { old, new } => {
            if !folders.replace_first_raw(old, new.clone()) {
                return Err(Error::StaleEntry(old.clone()));
            }
        }
        // Current contents are discarded, not snapshotted again.
        Action::Clear(_) => folders.restore_raw(Vec::new()),
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
