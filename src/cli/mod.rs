//! CLI module for the workflow step binaries
//!
//! Handles command-line argument parsing and verbosity control.

pub mod args;

pub use args::{CommonArgs, FilePickerArgs, ForeachArgs, Verbosity};
