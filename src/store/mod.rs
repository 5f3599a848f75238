//! Persistence module for SwiftFolder
//!
//! This module handles saving and loading the folder list to/from a JSON
//! file in the platform-specific configuration directory.

mod persistence;

pub use persistence::*;
