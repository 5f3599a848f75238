//! SwiftFolder - library crate
//!
//! A small desktop utility for keeping a named list of folder paths and
//! opening them in the system file browser. The core is the undo/redo action
//! log over the ordered list ([`folders`]) plus JSON persistence ([`store`]);
//! everything else is UI glue around it. Exposed as a library so the GUI
//! binary and the `swiftfolder-now` quick launcher share the same modules.

pub mod app;
pub mod error;
pub mod files;
pub mod folders;
pub mod launcher;
pub mod state;
pub mod store;
pub mod ui;
