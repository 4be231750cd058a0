// Directory scanning module
// Walks dev roots and marks every directory whose basename is an exclusion name

use super::error::MarkerError;
use super::patterns::ExclusionNames;
use super::writer::{mark, MarkOutcome, MarkResult};
use jwalk::{Parallelism, WalkDir};
use std::path::Path;
use std::sync::Arc;

/// Engine for finding and marking excluded directories under a set of roots
///
/// Descent stops at every match: nothing below a matched directory is visited,
/// so a `node_modules` nested in another `node_modules` is never marked.
pub struct Scanner {
    names: Arc<ExclusionNames>,
    dry_run: bool,
}

impl Scanner {
    /// Create a new Scanner that writes markers
    pub fn new(names: ExclusionNames) -> Self {
        Self {
            names: Arc::new(names),
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode (no filesystem writes)
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Scan every root in order and return one result per decision
    ///
    /// Roots are not deduplicated; overlapping roots only cost a second walk
    /// since already-marked directories report `AlreadyMarked`.
    pub fn apply<P: AsRef<Path>>(&self, roots: &[P]) -> Vec<MarkResult> {
        roots
            .iter()
            .flat_map(|root| self.scan_root(root.as_ref()))
            .collect()
    }

    /// Scan a single root
    ///
    /// # Returns
    /// Results in traversal order (children sorted by name). A missing root
    /// yields a single `SkippedMissing` result and no traversal.
    pub fn scan_root(&self, root: &Path) -> Vec<MarkResult> {
        if !root.is_absolute() {
            return vec![MarkResult::new(
                root,
                MarkOutcome::Warned(MarkerError::RelativeRoot { path: root.to_path_buf() }),
            )];
        }

        if !root.exists() {
            return vec![MarkResult::new(root, MarkOutcome::SkippedMissing)];
        }

        // The root itself can be a match; then there is nothing to walk
        if root.is_dir() && self.names.matches_path(root) {
            return vec![MarkResult::new(root, mark(root, self.dry_run))];
        }

        log::debug!("walking {}", root.display());
        let mut results = Vec::new();

        for entry in self.walker(root) {
            match entry {
                Ok(entry) => {
                    if entry.depth == 0 {
                        continue;
                    }
                    if entry.file_type().is_dir() && self.names.matches(&entry.file_name) {
                        let path = entry.path();
                        let outcome = mark(&path, self.dry_run);
                        results.push(MarkResult::new(path, outcome));
                    }
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf);
                    log::warn!("skipping unreadable entry: {}", e);
                    results.push(MarkResult::new(
                        path.clone().unwrap_or_else(|| root.to_path_buf()),
                        MarkOutcome::Warned(MarkerError::WalkFailed {
                            path,
                            reason: e.to_string(),
                        }),
                    ));
                }
            }
        }

        results
    }

    fn walker(&self, root: &Path) -> WalkDir {
        let names = Arc::clone(&self.names);

        WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .process_read_dir(move |_depth, _path, _state, children| {
                // Only directories can match or be descended into
                children.retain(|child| {
                    child
                        .as_ref()
                        .map(|entry| entry.file_type().is_dir())
                        .unwrap_or(true)
                });

                // Prune: a matched directory is yielded but never read
                for entry in children.iter_mut().flatten() {
                    if names.matches(&entry.file_name) {
                        entry.read_children_path = None;
                    }
                }
            })
    }
}
