//! Exclusion-name matching for directory traversal.
//!
//! A directory matches when its basename is exactly one of the names.
//! There are no globs: build output folders have fixed names.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// Directory names excluded by default.
pub const DEFAULT_EXCLUSION_NAMES: &[&str] = &[
    // JavaScript / TypeScript
    "node_modules",
    "dist",
    "build",
    ".next",
    ".nuxt",
    ".turbo",
    ".parcel-cache",
    ".svelte-kit",
    ".cache",
    "coverage",
    // Rust
    "target",
    // Python
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    // JVM
    ".gradle",
    // Apple
    "DerivedData",
    "Pods",
    // Infrastructure
    ".terraform",
];

/// Set of directory basenames to mark.
#[derive(Debug, Clone)]
pub struct ExclusionNames {
    /// Names in the order they were added (for display).
    names: Vec<String>,
    /// Lookup set.
    set: HashSet<String>,
}

impl Default for ExclusionNames {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ExclusionNames {
    /// Create an empty name set.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            set: HashSet::new(),
        }
    }

    /// Create with the default exclusion names.
    pub fn with_defaults() -> Self {
        Self::from_names(DEFAULT_EXCLUSION_NAMES.iter().copied())
    }

    /// Create from a list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::new();
        out.extend(names);
        out
    }

    /// Add a name. Duplicates are kept in the display list and cost nothing else.
    pub fn add_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.set.insert(name.clone());
        self.names.push(name);
    }

    /// Append user-supplied names.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_name(name);
        }
    }

    /// Check whether a basename is an exclusion name.
    pub fn matches(&self, basename: &OsStr) -> bool {
        // Non UTF-8 names can never equal one of ours
        basename.to_str().is_some_and(|name| self.set.contains(name))
    }

    /// Check whether the last component of `path` is an exclusion name.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matches(name))
    }

    /// Get the names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
