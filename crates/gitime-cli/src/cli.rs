//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::report::ReportArgs;

/// Sum the time logged with `/spend` directives in git commit messages.
///
/// Lines such as `/spend 1h 30m` or `/spent 2d` in a commit subject or body
/// are added up. Days are 8 hours, weeks 5 days and months 4 weeks.
#[derive(Debug, Parser)]
#[command(name = "gitime", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Total the time logged in commit history (the default).
    Report(ReportArgs),

    /// Total the time logged in a message read from stdin.
    Scan {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
