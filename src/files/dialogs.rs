//! Native folder picker dialogs using the rfd crate

use rfd::FileDialog;
use std::path::PathBuf;

/// Opens a native folder picker dialog.
///
/// Returns `Some(PathBuf)` if a folder was selected, `None` if cancelled.
pub fn pick_folder_dialog(title: &str, initial_dir: Option<&PathBuf>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title(title);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_folder()
}
