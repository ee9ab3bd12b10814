//! Commits as a source of time-tracking directives.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::time_spent::TimeSpent;

/// A commit message and the metadata shown next to it in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash.
    pub id: String,
    pub author: String,
    pub authored_at: DateTime<Utc>,
    /// First line of the message.
    pub subject: String,
    /// Everything after the subject, possibly empty.
    #[serde(default)]
    pub body: String,
}

impl Commit {
    /// Abbreviated hash for display.
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }

    /// Time logged in the subject plus time logged in the body.
    pub fn time_spent(&self, grammar: &Grammar) -> TimeSpent {
        grammar.scan(&self.subject) + grammar.scan(&self.body)
    }
}

/// Time logged by a single commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitTimeSpent {
    pub commit: Commit,
    pub time_spent: TimeSpent,
}

/// Scans every commit, in parallel, keeping the input order.
pub fn breakdown(grammar: &Grammar, commits: &[Commit]) -> Vec<CommitTimeSpent> {
    let entries: Vec<CommitTimeSpent> = commits
        .par_iter()
        .map(|commit| CommitTimeSpent {
            time_spent: commit.time_spent(grammar),
            commit: commit.clone(),
        })
        .collect();

    tracing::debug!(
        commits = entries.len(),
        with_time = entries.iter().filter(|e| !e.time_spent.is_zero()).count(),
        "scanned commits"
    );
    entries
}

/// Grand total of a breakdown.
///
/// Entries are added in order so the floating point result does not depend
/// on how the scan was scheduled.
pub fn total(entries: &[CommitTimeSpent]) -> TimeSpent {
    entries.iter().map(|e| e.time_spent).sum()
}
