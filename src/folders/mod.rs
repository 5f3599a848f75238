//! Folder list module for SwiftFolder
//!
//! This module owns the ordered list of folder paths and the undo/redo
//! history of actions applied to it.

mod history;
mod list;

pub use history::*;
pub use list::*;
