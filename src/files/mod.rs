//! Local filesystem helpers
//!
//! Directory listing and literal name matching shared by both tools.

pub mod listing;
pub mod pattern;

pub use listing::{list_files, split_extension, FileEntry};
pub use pattern::MatchPattern;
