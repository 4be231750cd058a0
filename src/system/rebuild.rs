//! Index rebuild trigger.
//!
//! Asks the indexer to erase and rebuild the index of the root volume. The
//! rebuild itself runs asynchronously inside the indexer; only acceptance of
//! the request is observed here.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Volume whose index is rebuilt.
pub const ROOT_VOLUME: &str = "/";

/// Result of a rebuild request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildStatus {
    /// Dry run: nothing was executed.
    DryRun,
    /// The indexer accepted the request.
    Requested,
}

/// `sudo mdutil -E /`
pub fn rebuild_command() -> Command {
    let mut cmd = Command::new("sudo");
    cmd.args(["mdutil", "-E", ROOT_VOLUME]);
    cmd
}

/// Request a full re-index unless `dry_run` is set.
pub fn rebuild(dry_run: bool) -> Result<RebuildStatus> {
    if dry_run {
        return Ok(RebuildStatus::DryRun);
    }

    let status = rebuild_command()
        .status()
        .context("failed to run sudo mdutil")?;

    if !status.success() {
        bail!("sudo mdutil -E {} exited with {}", ROOT_VOLUME, status);
    }

    Ok(RebuildStatus::Requested)
}
