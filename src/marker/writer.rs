// Marker write primitive
// Ensures a zero-byte never-index file exists inside one directory

use super::error::MarkerError;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

/// File name the indexer treats as "skip this directory"
pub const MARKER_FILE_NAME: &str = ".metadata_never_index";

/// What happened to one directory
#[derive(Debug)]
pub enum MarkOutcome {
    /// Marker was already present; nothing written
    AlreadyMarked,
    /// Marker was created
    Marked,
    /// Dry run: marker would have been created
    WouldMark,
    /// Directory does not exist
    SkippedMissing,
    /// Marker could not be created
    Warned(MarkerError),
}

impl MarkOutcome {
    /// Short label used in the decision log
    pub fn label(&self) -> &'static str {
        match self {
            MarkOutcome::AlreadyMarked => "already marked",
            MarkOutcome::Marked => "marked",
            MarkOutcome::WouldMark => "would mark",
            MarkOutcome::SkippedMissing => "missing",
            MarkOutcome::Warned(_) => "warning",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, MarkOutcome::Warned(_))
    }
}

/// Outcome paired with the directory it applies to
#[derive(Debug)]
pub struct MarkResult {
    pub path: PathBuf,
    pub outcome: MarkOutcome,
}

impl MarkResult {
    pub fn new(path: impl Into<PathBuf>, outcome: MarkOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// Path of the marker file inside `dir`
pub fn marker_path(dir: &Path) -> PathBuf {
    dir.join(MARKER_FILE_NAME)
}

/// Ensure `dir` carries a marker file
///
/// Never fails: write errors come back as `MarkOutcome::Warned` because some
/// locations (mounted or virtualized filesystems) are expected to be unwritable.
/// With `dry_run` set the filesystem is only read.
pub fn mark(dir: &Path, dry_run: bool) -> MarkOutcome {
    if !dir.exists() {
        return MarkOutcome::SkippedMissing;
    }

    let marker = marker_path(dir);
    if marker.exists() {
        return MarkOutcome::AlreadyMarked;
    }

    if dry_run {
        return MarkOutcome::WouldMark;
    }

    // create_new so a marker written by someone else since the check is not an error
    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(_) => {
            log::debug!("created {}", marker.display());
            MarkOutcome::Marked
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => MarkOutcome::AlreadyMarked,
        Err(e) => MarkOutcome::Warned(MarkerError::from_io_error(e, "creating marker in", dir.to_path_buf())),
    }
}
