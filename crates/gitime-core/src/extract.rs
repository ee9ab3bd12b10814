//! Applying a [`Grammar`] to lines and messages.

use crate::grammar::{Grammar, Matcher};
use crate::time_spent::TimeSpent;
use crate::unit::Unit;

impl Matcher {
    /// Reads one line with this matcher alone.
    ///
    /// Returns `None` when the line does not match. Groups the matcher lacks,
    /// or that did not participate in the match, count as zero.
    pub fn extract(&self, line: &str) -> Option<TimeSpent> {
        let caps = self.regex().captures(line)?;

        let mut ts = TimeSpent::ZERO;
        for unit in Unit::ALL {
            let Some(text) = self
                .slot(unit)
                .and_then(|index| caps.get(index))
                .map(|m| m.as_str())
                .filter(|text| !text.is_empty())
            else {
                continue;
            };

            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => *ts.get_mut(unit) = value,
                // Out of f64 range: the literal is digits only, but too long to hold.
                Ok(value) => {
                    tracing::warn!(
                        group = unit.group_name(),
                        text,
                        pattern = self.pattern(),
                        %value,
                        "quantity out of range, counting it as zero"
                    );
                }
                Err(err) => {
                    // Only reachable if a matcher's number pattern is broken.
                    tracing::warn!(
                        group = unit.group_name(),
                        text,
                        pattern = self.pattern(),
                        error = %err,
                        "cannot parse quantity, counting it as zero"
                    );
                }
            }
        }

        Some(ts)
    }
}

impl Grammar {
    /// Reads a single, already trimmed line.
    ///
    /// Matchers are tried in priority order and the first match wins.
    pub fn extract_line(&self, line: &str) -> Option<TimeSpent> {
        self.matchers()
            .iter()
            .find_map(|matcher| matcher.extract(line))
    }

    /// Sums every directive in a possibly multi-line message.
    ///
    /// Lines are trimmed before matching; lines without a directive are skipped.
    pub fn scan(&self, message: &str) -> TimeSpent {
        message
            .split('\n')
            .filter_map(|line| self.extract_line(line.trim()))
            .sum()
    }
}

/// Sums the `/spend` and `/spent` directives in `message` using the standard grammar.
///
/// Units may be abbreviated (`1h`, `2d`, `1mo`) and a bare number means
/// minutes.
pub fn collect_time_spent(message: &str) -> TimeSpent {
    Grammar::global().scan(message)
}
