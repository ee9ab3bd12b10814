//! Reading commit history from `git log`.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gitime_core::Commit;

/// Separates fields within a record (ASCII unit separator).
const FIELD_SEP: char = '\x1f';

/// Terminates each record (ASCII record separator).
const RECORD_SEP: char = '\x1e';

/// Hash, author, ISO 8601 author date, subject and body.
const LOG_FORMAT: &str = "--format=%H%x1f%an%x1f%aI%x1f%s%x1f%b%x1e";

/// Which part of history to read.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogQuery<'a> {
    /// Repository to run in; the current directory when `None`.
    pub repo: Option<&'a Path>,
    /// Revision range, e.g. `v1.0..HEAD`; `HEAD` when `None`.
    pub range: Option<&'a str>,
    pub no_merges: bool,
}

/// Runs `git log` and parses its output.
pub fn read_commits(git: &Path, query: &LogQuery<'_>) -> Result<Vec<Commit>> {
    let mut command = Command::new(git);
    if let Some(repo) = query.repo {
        command.arg("-C").arg(repo);
    }
    command.arg("log").arg(LOG_FORMAT);
    if query.no_merges {
        command.arg("--no-merges");
    }
    if let Some(range) = query.range {
        command.arg(range);
    }
    // Keeps a range from being read as a path.
    command.arg("--");

    tracing::debug!(?command, "running git log");
    let output = command
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("failed to run {}", git.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow::anyhow!(
            "git log exited with status {}: {}",
            output.status,
            stderr.trim()
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_log(&stdout))
}

/// Parses records produced with [`LOG_FORMAT`].
///
/// Malformed records are logged and skipped.
pub fn parse_log(output: &str) -> Vec<Commit> {
    output
        .split(RECORD_SEP)
        .filter(|record| !record.trim().is_empty())
        .filter_map(|record| match parse_record(record) {
            Ok(commit) => Some(commit),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed git log record");
                None
            }
        })
        .collect()
}

fn parse_record(record: &str) -> Result<Commit> {
    // git terminates each formatted record with a newline.
    let record = record.trim_start_matches(['\n', '\r']);
    let mut fields = record.splitn(5, FIELD_SEP);
    let mut next = |name: &str| {
        fields
            .next()
            .with_context(|| format!("missing {name} in record {record:?}"))
    };

    let id = next("hash")?.to_string();
    let author = next("author")?.to_string();
    let date = next("author date")?;
    let subject = next("subject")?.to_string();
    let body = next("body")?.trim_end().to_string();

    let authored_at = DateTime::parse_from_rfc3339(date)
        .with_context(|| format!("invalid author date {date:?} for commit {id}"))?
        .with_timezone(&Utc);

    Ok(Commit {
        id,
        author,
        authored_at,
        subject,
        body,
    })
}
