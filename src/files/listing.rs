//! Directory listing
//!
//! Lists the regular files directly inside a folder. Subdirectories are
//! skipped and nothing is sorted: callers that take the "first" entry get
//! whatever order the filesystem enumerates.

use crate::errors::{Result, StepError};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One listed file
///
/// `name` is the display form used for matching and remote references.
/// Filesystem access goes through the raw `os_name`, which may not be
/// valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    os_name: OsString,
}

impl FileEntry {
    pub fn new(os_name: impl Into<OsString>) -> Self {
        let os_name = os_name.into();
        Self {
            name: os_name.to_string_lossy().to_string(),
            os_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn os_name(&self) -> &OsStr {
        &self.os_name
    }

    pub fn into_name(self) -> String {
        self.name
    }

    /// Path of this entry inside `folder`
    pub fn path_in(&self, folder: &Path) -> PathBuf {
        folder.join(&self.os_name)
    }
}

impl AsRef<str> for FileEntry {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// List files directly contained in `folder`
///
/// # Errors
/// - `NotFound` if `folder` does not exist or is not a directory
/// - `IoError` if the directory cannot be read
pub fn list_files(folder: impl AsRef<Path>) -> Result<Vec<FileEntry>> {
    let folder = folder.as_ref();

    if !folder.is_dir() {
        return Err(StepError::NotFound {
            path: folder.to_path_buf(),
        });
    }

    let read_dir = fs::read_dir(folder).map_err(|e| StepError::io(folder, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| StepError::io(folder, e))?;

        // Follows symlinks, so a link to a file counts as a file
        if !entry.path().is_file() {
            continue;
        }

        entries.push(FileEntry::new(entry.file_name()));
    }

    debug!(folder = %folder.display(), count = entries.len(), "listed input folder");
    Ok(entries)
}

/// Split a file name into stem and extension (with its leading dot)
///
/// `img1.png` gives `("img1", ".png")`, `.hidden` gives `(".hidden", "")`
/// and `a.tar.gz` gives `("a.tar", ".gz")`.
pub fn split_extension(file_name: &str) -> (String, String) {
    let path = Path::new(file_name);

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());

    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (stem, extension)
}
