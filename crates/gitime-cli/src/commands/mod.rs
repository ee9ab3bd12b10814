//! CLI subcommand implementations.

pub mod log;
pub mod report;
pub mod scan;
