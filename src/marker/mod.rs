//! Marker module - keeps noisy development folders out of the Spotlight index
//!
//! This module finds build output, caches and dependency trees like node_modules,
//! target, .venv, __pycache__, etc. and drops a zero-byte `.metadata_never_index`
//! file into each so the indexer skips them.

pub mod error;
pub mod fixed;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod writer;

pub use error::MarkerError;
pub use fixed::{FixedGroup, FixedPathApplier};
pub use patterns::ExclusionNames;
pub use report::Reporter;
pub use scanner::Scanner;
pub use stats::Stats;
pub use writer::{mark, MarkOutcome, MarkResult, MARKER_FILE_NAME};
