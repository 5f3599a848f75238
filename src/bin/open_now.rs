//! swiftfolder-now - companion quick launcher
//!
//! Loads the persisted folder list and opens every folder immediately, with
//! no UI. Useful behind a quick-launch shortcut. Missing folders are
//! reported to stderr and skipped, same as the GUI's Open Folders button.

use log::info;
use swiftfolder::{launcher, store};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let folders = store::load_folders();
    if folders.is_empty() {
        eprintln!("No folders in the saved list.");
        return;
    }

    info!("Opening {} folder(s)", folders.len());
    let report = launcher::open_folders(&folders, false);

    for path in &report.missing {
        eprintln!("The folder {} does not exist.", path.display());
    }
    for (path, err) in &report.failed {
        eprintln!("Failed to open {}: {}", path.display(), err);
    }

    println!("Opened {} of {} folder(s).", report.opened, folders.len());
}
