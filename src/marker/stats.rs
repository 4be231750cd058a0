//! Outcome tallies for the end-of-run summary.

use std::fmt;

use super::writer::{MarkOutcome, MarkResult};

/// Counts of each outcome seen during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub marked: usize,
    pub already_marked: usize,
    pub would_mark: usize,
    pub missing: usize,
    pub warnings: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: &MarkOutcome) {
        match outcome {
            MarkOutcome::Marked => self.marked += 1,
            MarkOutcome::AlreadyMarked => self.already_marked += 1,
            MarkOutcome::WouldMark => self.would_mark += 1,
            MarkOutcome::SkippedMissing => self.missing += 1,
            MarkOutcome::Warned(_) => self.warnings += 1,
        }
    }

    /// Count every result in a batch.
    pub fn record_all(&mut self, results: &[MarkResult]) {
        for result in results {
            self.record(&result.outcome);
        }
    }

    pub fn total(&self) -> usize {
        self.marked + self.already_marked + self.would_mark + self.missing + self.warnings
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} marked, {} already marked, {} would mark, {} missing, {} warnings",
            self.marked, self.already_marked, self.would_mark, self.missing, self.warnings
        )
    }
}
