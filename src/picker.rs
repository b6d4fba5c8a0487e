//! File picker
//!
//! Copies the first file whose name contains a literal pattern to
//! `<output>/<basename><ext>`. Matching stops at the first hit; later
//! matches are ignored. Finding nothing is not an error.

use crate::config::PickerConfig;
use crate::errors::{Result, StepError};
use crate::files::{list_files, FileEntry, MatchPattern};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything needed for one pick
#[derive(Debug, Clone)]
pub struct PickRequest {
    pub input_folder: PathBuf,
    pub pattern: MatchPattern,
    pub output_folder: PathBuf,
    pub output_basename: String,
}

impl PickRequest {
    pub fn new(
        input_folder: impl Into<PathBuf>,
        pattern: MatchPattern,
        output_folder: impl Into<PathBuf>,
        config: &PickerConfig,
    ) -> Self {
        Self {
            input_folder: input_folder.into(),
            pattern,
            output_folder: output_folder.into(),
            output_basename: config.output_basename.clone(),
        }
    }

    /// Destination path for a matched file name
    ///
    /// The extension is carried over as raw bytes, so names that are not
    /// valid UTF-8 keep their real suffix.
    pub fn destination_for(&self, file_name: impl AsRef<OsStr>) -> PathBuf {
        let mut name = OsString::from(&self.output_basename);
        if let Some(extension) = Path::new(file_name.as_ref()).extension() {
            name.push(".");
            name.push(extension);
        }
        self.output_folder.join(name)
    }
}

/// What a pick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The first matching file was copied
    Copied {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Nothing matched; no copy was made
    NoMatch {
        pattern: String,
        candidates: Vec<String>,
    },
}

impl PickOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, PickOutcome::Copied { .. })
    }

    /// Turn a miss into `PatternNotMatched` for callers that need a hit
    pub fn require_match(self) -> Result<(PathBuf, PathBuf)> {
        match self {
            PickOutcome::Copied {
                source,
                destination,
            } => Ok((source, destination)),
            PickOutcome::NoMatch {
                pattern,
                candidates,
            } => Err(StepError::PatternNotMatched {
                pattern,
                candidates,
            }),
        }
    }
}

/// Pick and copy the first matching file
pub fn pick_file(request: &PickRequest) -> Result<PickOutcome> {
    let files = list_files(&request.input_folder)?;

    let Some(matched) = request.pattern.first_match(&files) else {
        info!(pattern = %request.pattern, "no file matched");
        return Ok(PickOutcome::NoMatch {
            pattern: request.pattern.to_string(),
            candidates: files.into_iter().map(FileEntry::into_name).collect(),
        });
    };

    let source = matched.path_in(&request.input_folder);
    let destination = request.destination_for(matched.os_name());
    copy_file(&source, &destination)?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        "copied matching file"
    );

    Ok(PickOutcome::Copied {
        source,
        destination,
    })
}

fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    // Copying a file onto itself would truncate it before reading
    if destination.exists() && same_file(source, destination)? {
        return Err(StepError::io(
            destination,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} and {} are the same file", source.display(), destination.display()),
            ),
        ));
    }

    fs::copy(source, destination)
        .map(|_| ())
        .map_err(|e| StepError::io(destination, e))
}

fn same_file(a: &Path, b: &Path) -> Result<bool> {
    let a = fs::canonicalize(a).map_err(|e| StepError::io(a, e))?;
    let b = fs::canonicalize(b).map_err(|e| StepError::io(b, e))?;
    Ok(a == b)
}
