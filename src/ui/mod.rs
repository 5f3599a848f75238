//! UI components for SwiftFolder

mod edit_dialog;

pub use edit_dialog::*;
