//! Fixed-path marking for well-known cache locations.
//!
//! These paths are literal, so there is no traversal: each one goes straight
//! to the marker write primitive.

use std::path::{Path, PathBuf};

use super::writer::{mark, MarkResult};

/// A named set of literal cache paths behind one on/off toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGroup {
    /// Display name (e.g. "editor caches").
    pub name: String,
    /// Paths to mark.
    pub paths: Vec<PathBuf>,
}

impl FixedGroup {
    pub fn new(name: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            paths,
        }
    }

    /// Build a group from paths relative to `home`.
    pub fn under_home(name: impl Into<String>, home: &Path, relative: &[&str]) -> Self {
        Self::new(name, relative.iter().map(|rel| home.join(rel)).collect())
    }
}

/// Applies markers to literal paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPathApplier {
    dry_run: bool,
}

impl FixedPathApplier {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Mark each path in order, one result per path.
    pub fn apply_fixed<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<MarkResult> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                MarkResult::new(path, mark(path, self.dry_run))
            })
            .collect()
    }

    /// Mark every path of a group.
    pub fn apply_group(&self, group: &FixedGroup) -> Vec<MarkResult> {
        self.apply_fixed(&group.paths)
    }
}
