//! Run configuration.
//!
//! Assembled once at startup from environment variables with per-variable
//! defaults, then passed by reference into the appliers. Nothing below this
//! module reads the environment.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::marker::{ExclusionNames, FixedGroup};

pub const ENV_DEV_ROOTS: &str = "DEV_ROOTS";
pub const ENV_EXTRA_EXCLUDES: &str = "EXTRA_EXCLUDES";
pub const ENV_MARK_GLOBAL_CACHES: &str = "MARK_GLOBAL_CACHES";
pub const ENV_INCLUDE_DOCKER_CACHES: &str = "INCLUDE_DOCKER_CACHES";
pub const ENV_INCLUDE_BROWSER_CACHES: &str = "INCLUDE_BROWSER_CACHES";
pub const ENV_INCLUDE_EDITOR_CACHES: &str = "INCLUDE_EDITOR_CACHES";
pub const ENV_INCLUDE_ORBSTACK: &str = "INCLUDE_ORBSTACK";

/// Dev roots scanned when `DEV_ROOTS` is unset, relative to home.
pub const DEFAULT_DEV_ROOTS: &[&str] = &["Developer", "Projects", "code"];

const EDITOR_CACHES: &[&str] = &[
    "Library/Application Support/Code/Cache",
    "Library/Application Support/Code/CachedData",
    "Library/Application Support/Code/CachedExtensionVSIXs",
    "Library/Application Support/Code/logs",
    "Library/Application Support/Cursor/Cache",
    "Library/Application Support/Cursor/CachedData",
    "Library/Caches/JetBrains",
    "Library/Developer/Xcode/DerivedData",
];

const BROWSER_CACHES: &[&str] = &[
    "Library/Caches/Google/Chrome",
    "Library/Caches/com.apple.Safari",
    "Library/Caches/Firefox",
    "Library/Caches/BraveSoftware",
    "Library/Caches/Microsoft Edge",
];

const DOCKER_CACHES: &[&str] = &["Library/Containers/com.docker.docker/Data", ".docker"];

const ORBSTACK_CACHES: &[&str] = &[".orbstack"];

const GLOBAL_CACHES: &[&str] = &["Library/Caches"];

/// Independent on/off switches for the fixed-path groups.
///
/// Defaults differ per variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub global_caches: bool,
    pub docker_caches: bool,
    pub browser_caches: bool,
    pub editor_caches: bool,
    pub orbstack: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            global_caches: false,
            docker_caches: false,
            browser_caches: true,
            editor_caches: true,
            orbstack: true,
        }
    }
}

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub home: PathBuf,
    /// Roots to walk, in order, duplicates kept.
    pub roots: Vec<PathBuf>,
    pub names: ExclusionNames,
    pub toggles: Toggles,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        Ok(Self::from_lookup(|key| std::env::var(key).ok(), &home))
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, home: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let roots = match lookup(ENV_DEV_ROOTS) {
            Some(value) => split_list(&value).map(|p| expand_home(p, home)).collect(),
            None => default_roots(home),
        };

        let mut names = ExclusionNames::with_defaults();
        if let Some(extra) = lookup(ENV_EXTRA_EXCLUDES) {
            names.extend(split_list(&extra));
        }

        let defaults = Toggles::default();
        let toggle = |key: &str, default: bool| resolve_toggle(key, lookup(key), default);
        let toggles = Toggles {
            global_caches: toggle(ENV_MARK_GLOBAL_CACHES, defaults.global_caches),
            docker_caches: toggle(ENV_INCLUDE_DOCKER_CACHES, defaults.docker_caches),
            browser_caches: toggle(ENV_INCLUDE_BROWSER_CACHES, defaults.browser_caches),
            editor_caches: toggle(ENV_INCLUDE_EDITOR_CACHES, defaults.editor_caches),
            orbstack: toggle(ENV_INCLUDE_ORBSTACK, defaults.orbstack),
        };

        Self {
            home: home.to_path_buf(),
            roots,
            names,
            toggles,
        }
    }

    /// Fixed-path groups that are switched on, in processing order.
    ///
    /// Disabled groups are absent entirely rather than reported as skipped.
    pub fn fixed_groups(&self) -> Vec<FixedGroup> {
        let home = self.home.as_path();
        let candidates = [
            (self.toggles.editor_caches, "editor caches", EDITOR_CACHES),
            (self.toggles.browser_caches, "browser caches", BROWSER_CACHES),
            (self.toggles.docker_caches, "Docker caches", DOCKER_CACHES),
            (self.toggles.orbstack, "OrbStack caches", ORBSTACK_CACHES),
            (self.toggles.global_caches, "global caches", GLOBAL_CACHES),
        ];

        candidates
            .into_iter()
            .filter(|(enabled, _, _)| *enabled)
            .map(|(_, name, paths)| FixedGroup::under_home(name, home, paths))
            .collect()
    }
}

fn default_roots(home: &Path) -> Vec<PathBuf> {
    DEFAULT_DEV_ROOTS
        .iter()
        .map(|rel| home.join(rel))
        .filter(|path| path.is_dir())
        .collect()
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Parse a boolean environment value.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn resolve_toggle(key: &str, value: Option<String>, default: bool) -> bool {
    match value {
        None => default,
        Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
            log::warn!("ignoring {}={:?}: expected 1/0, true/false, yes/no or on/off", key, raw);
            default
        }),
    }
}
