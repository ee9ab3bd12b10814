//! Scan command: total time logged in a message read from stdin.
//!
//! Useful in commit-msg hooks and for checking a directive before committing.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use gitime_core::collect_time_spent;

use crate::commands::report;

/// Runs the scan command, reading the whole of `reader` as one message.
pub fn run<R: Read, W: Write>(mut reader: R, writer: &mut W, json: bool) -> Result<()> {
    let mut message = String::new();
    reader
        .read_to_string(&mut message)
        .context("failed to read message")?;

    let total = collect_time_spent(&message);
    tracing::debug!(%total, "scanned message");
    report::write_total(writer, &total, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn scan(message: &str, json: bool) -> String {
        let mut output = Vec::new();
        run(message.as_bytes(), &mut output, json).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scan_sums_directive_lines() {
        let message = "Implement scanner\n\n/spend 1h\nReviewed with Grace\n/spent 30m\n";
        assert_snapshot!(scan(message, false), @r"
        1.0 hour 30.0 minutes
        90 minutes
        ");
    }

    #[test]
    fn scan_without_directives() {
        assert_eq!(scan("Just a message\n", false), "\n0 minutes\n");
    }

    #[test]
    fn scan_json() {
        let value: serde_json::Value =
            serde_json::from_str(&scan("/spend 1mo", true)).unwrap();
        assert_eq!(value["months"], 1.0);
        assert_eq!(value["formatted"], "1.0 month");
        assert_eq!(value["total_minutes"], 9600);
    }

    #[test]
    fn scan_rejects_invalid_utf8() {
        let mut output = Vec::new();
        let err = run(&[0xff, 0xfe][..], &mut output, false).unwrap_err();
        assert!(err.to_string().contains("failed to read message"));
    }
}
