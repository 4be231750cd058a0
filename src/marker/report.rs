//! Console decision log.
//!
//! Every outcome gets its own line so a run can be audited afterwards.

use colored::Colorize;

use super::stats::Stats;
use super::writer::{MarkOutcome, MarkResult};

/// Prints outcomes as they arrive and keeps the tallies.
#[derive(Debug, Default)]
pub struct Reporter {
    stats: Stats,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        println!("\n{}", title.bold());
    }

    /// Print and count one result.
    pub fn report(&mut self, result: &MarkResult) {
        self.stats.record(&result.outcome);

        let path = result.path.display();
        match &result.outcome {
            MarkOutcome::Marked => println!("  {} {}", "marked".green().bold(), path),
            MarkOutcome::AlreadyMarked => {
                println!("  {}", format!("already marked {}", path).dimmed())
            }
            MarkOutcome::WouldMark => println!("  {} {}", "would mark".cyan(), path),
            MarkOutcome::SkippedMissing => println!("  {} {}", "missing, skipped".yellow(), path),
            MarkOutcome::Warned(err) => {
                eprintln!("  {} {}", "warning".red().bold(), err.summary())
            }
        }
    }

    /// Print and count a batch of results.
    pub fn report_all(&mut self, results: &[MarkResult]) {
        if results.is_empty() {
            println!("  {}", "nothing to mark".dimmed());
            return;
        }
        for result in results {
            self.report(result);
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Print the end-of-run tallies.
    pub fn summary(&self, dry_run: bool) {
        let prefix = if dry_run { "Dry run complete" } else { "Done" };
        println!("\n{}: {}", prefix.bold(), self.stats);
    }
}
