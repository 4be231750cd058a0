//! External commands: index rebuild and indexer process snapshot.

pub mod rebuild;
pub mod status;

pub use rebuild::{rebuild, RebuildStatus};
pub use status::{report_top_processes, ProcessSnapshot};
