//! File dialog module for SwiftFolder
//!
//! Native folder picker integration used by the Add and Replace commands.

pub mod dialogs;
