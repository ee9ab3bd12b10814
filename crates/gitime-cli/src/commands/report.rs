//! Report command: total time logged in a repository's history.
//!
//! Human output is the rendered total followed by the total in minutes.
//! `--by-commit` lists each commit that logged time first, and `--json`
//! switches to a machine-readable object.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use gitime_core::{CommitTimeSpent, Grammar, TimeSpent};
use serde::Serialize;

use crate::Config;
use crate::commands::log::{self, LogQuery};

#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Revision range to read (e.g. `v1.0..HEAD`). Defaults to HEAD.
    pub range: Option<String>,

    /// Repository to read instead of the current directory.
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// List every commit that logged time.
    #[arg(long)]
    pub by_commit: bool,

    /// Skip merge commits.
    #[arg(long)]
    pub no_merges: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a total.
#[derive(Debug, Serialize)]
struct TotalOutput<'a> {
    #[serde(flatten)]
    time_spent: TimeSpent,
    formatted: String,
    total_minutes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    commits: Option<Vec<CommitOutput<'a>>>,
}

/// JSON shape of one commit in a breakdown.
#[derive(Debug, Serialize)]
struct CommitOutput<'a> {
    id: &'a str,
    author: &'a str,
    authored_at: DateTime<Utc>,
    subject: &'a str,
    #[serde(flatten)]
    time_spent: TimeSpent,
    formatted: String,
    minutes: u64,
}

impl<'a> TotalOutput<'a> {
    fn new(time_spent: TimeSpent) -> Self {
        Self {
            time_spent,
            formatted: time_spent.to_string(),
            total_minutes: time_spent.to_minutes(),
            commits: None,
        }
    }

    fn with_commits(mut self, entries: impl Iterator<Item = &'a CommitTimeSpent>) -> Self {
        self.commits = Some(
            entries
                .map(|entry| CommitOutput {
                    id: &entry.commit.id,
                    author: &entry.commit.author,
                    authored_at: entry.commit.authored_at,
                    subject: &entry.commit.subject,
                    time_spent: entry.time_spent,
                    formatted: entry.time_spent.to_string(),
                    minutes: entry.time_spent.to_minutes(),
                })
                .collect(),
        );
        self
    }
}

/// Runs the report command.
pub fn run<W: Write>(writer: &mut W, args: &ReportArgs, config: &Config) -> Result<()> {
    let query = LogQuery {
        repo: args.repo.as_deref(),
        range: args.range.as_deref(),
        no_merges: args.no_merges || config.no_merges,
    };
    let commits = log::read_commits(&config.git_binary, &query)?;
    tracing::debug!(commits = commits.len(), "read commit history");

    let entries = gitime_core::breakdown(Grammar::global(), &commits);
    write_report(writer, &entries, args.by_commit, args.json)
}

/// Writes the total of `entries`, optionally preceded by the per-commit list.
pub fn write_report<W: Write>(
    writer: &mut W,
    entries: &[CommitTimeSpent],
    by_commit: bool,
    json: bool,
) -> Result<()> {
    let total = gitime_core::total(entries);
    let logged = entries.iter().filter(|e| !e.time_spent.is_zero());

    if json {
        let mut output = TotalOutput::new(total);
        if by_commit {
            output = output.with_commits(logged);
        }
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        return Ok(());
    }

    if by_commit {
        let mut any = false;
        for entry in logged {
            any = true;
            writeln!(
                writer,
                "{}  {}  {}  {}",
                entry.commit.short_id(),
                entry.commit.authored_at.format("%Y-%m-%d"),
                entry.time_spent,
                entry.commit.subject
            )?;
        }
        if any {
            writeln!(writer)?;
        }
    }

    write_human_total(writer, &total)
}

/// Writes a single total, as text or JSON.
pub fn write_total<W: Write>(writer: &mut W, total: &TimeSpent, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, &TotalOutput::new(*total))?;
        writeln!(writer)?;
        return Ok(());
    }
    write_human_total(writer, total)
}

fn write_human_total<W: Write>(writer: &mut W, total: &TimeSpent) -> Result<()> {
    writeln!(writer, "{total}")?;
    writeln!(writer, "{} minutes", total.to_minutes())?;
    Ok(())
}
