//! Indexer process snapshot.
//!
//! A coarse before/after health check: lists the running indexer processes,
//! busiest first.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::cmp::Ordering;
use std::path::Path;
use std::process::Command;

/// Substrings of process names that belong to the indexing service.
pub const INDEXER_PROCESS_PATTERNS: &[&str] = &["mds", "mdworker", "mds_stores", "mdsync", "corespotlightd", "Spotlight"];

/// Maximum number of processes shown.
pub const MAX_PROCESSES: usize = 10;

/// One row of `ps` output.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub cpu: f32,
    pub mem: f32,
    pub command: String,
}

impl ProcessSnapshot {
    /// Basename of the executable.
    pub fn name(&self) -> &str {
        Path::new(&self.command)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.command)
    }

    pub fn is_indexer(&self) -> bool {
        let name = self.name();
        INDEXER_PROCESS_PATTERNS.iter().any(|pattern| name.contains(pattern))
    }
}

/// `ps` with headerless pid, %cpu, %mem, command columns
pub fn ps_command() -> Command {
    let mut cmd = Command::new("ps");
    cmd.args(["-Ao", "pid=,pcpu=,pmem=,comm="]).env("LC_ALL", "C");
    cmd
}

/// Split off the first whitespace-delimited field.
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], &s[end..]))
}

fn parse_percent(s: &str) -> Option<f32> {
    s.replace(',', ".").parse().ok()
}

/// Parse one `ps` line. The command column may contain spaces.
pub fn parse_ps_line(line: &str) -> Option<ProcessSnapshot> {
    let (pid, rest) = next_field(line)?;
    let (cpu, rest) = next_field(rest)?;
    let (mem, rest) = next_field(rest)?;
    let command = rest.trim();
    if command.is_empty() {
        return None;
    }

    Some(ProcessSnapshot {
        pid: pid.parse().ok()?,
        cpu: parse_percent(cpu)?,
        mem: parse_percent(mem)?,
        command: command.to_string(),
    })
}

/// Parse `ps` output, skipping lines that do not fit the format.
pub fn parse_ps_output(output: &str) -> Vec<ProcessSnapshot> {
    output.lines().filter_map(parse_ps_line).collect()
}

/// Keep indexer processes, sort by CPU descending, cap to `limit`.
pub fn top_indexer_processes(processes: Vec<ProcessSnapshot>, limit: usize) -> Vec<ProcessSnapshot> {
    let mut matches: Vec<ProcessSnapshot> = processes.into_iter().filter(ProcessSnapshot::is_indexer).collect();
    matches.sort_by(|a, b| b.cpu.partial_cmp(&a.cpu).unwrap_or(Ordering::Equal));
    matches.truncate(limit);
    matches
}

/// Run `ps`, print the busiest indexer processes and return them.
///
/// No matching process is not an error.
pub fn report_top_processes() -> Result<Vec<ProcessSnapshot>> {
    let output = ps_command().output().context("failed to run ps")?;
    if !output.status.success() {
        bail!("ps exited with {}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let top = top_indexer_processes(parse_ps_output(&stdout), MAX_PROCESSES);

    println!("\n{}", "Indexer processes (by CPU)".bold());
    if top.is_empty() {
        println!("  {}", "none running".dimmed());
    }
    for process in &top {
        println!(
            "  {:>7}  {:>5.1}% cpu  {:>5.1}% mem  {}",
            process.pid, process.cpu, process.mem, process.command
        );
    }

    Ok(top)
}
