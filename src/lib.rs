// Library module for spotlight-excluder
// Re-exports modules for use in integration tests and the binary

pub mod cli;
pub mod config;
pub mod marker;
pub mod system;
