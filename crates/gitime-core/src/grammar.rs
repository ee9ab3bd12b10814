//! Directive grammar: the textual shapes recognized as `/spend` directives.
//!
//! A [`Grammar`] is an ordered list of [`Matcher`]s. Each matcher is a regular
//! expression exposing some of the named quantity groups `months`, `weeks`,
//! `days`, `hours` and `minutes`. Matchers are tried in insertion order and
//! the first one that matches a line wins, so appending a matcher never
//! changes how previously recognized lines are read.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::unit::Unit;

/// ASCII whitespace only; Unicode spaces such as U+2003 do not separate tokens.
const SPACE: &str = r"[\t\n\f\r ]";

/// Directive token at the start of a line: `/spend` or `/spent`.
fn directive() -> String {
    format!(r"^/spen[dt]{SPACE}+")
}

/// Unsigned decimal: `N`, `N.`, `.N` or `N.N`.
const NUMBER: &str = r"[0-9]+[.]?[0-9]*|[0-9]*[.]?[0-9]+";

static GLOBAL: LazyLock<Grammar> = LazyLock::new(Grammar::standard);

/// Errors raised while compiling a matcher.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The pattern is not a valid regular expression.
    #[error("invalid directive pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The pattern compiled but exposes none of the quantity groups.
    #[error(
        "directive pattern {pattern:?} has no quantity group (expected one of months, weeks, days, hours, minutes)"
    )]
    NoQuantityGroups { pattern: String },
}

/// Unit suffixes accepted after a quantity, and whether the suffix may be omitted.
///
/// Alternatives are tried left to right, so the longest spelling comes first;
/// otherwise `3 days` would stop after `da` and hide any following group.
const fn unit_suffix(unit: Unit) -> (&'static str, bool) {
    match unit {
        Unit::Months => ("months?|mo", false),
        Unit::Weeks => ("weeks?|we?", false),
        Unit::Days => ("days?|da?", false),
        Unit::Hours => ("hours?|ho?", false),
        // A bare number counts as minutes.
        Unit::Minutes => ("minutes?|mins?|mi?", true),
    }
}

/// Optional `<quantity> <unit>` group for one unit.
fn quantity_group(unit: Unit) -> String {
    let (suffix, suffix_optional) = unit_suffix(unit);
    let optional = if suffix_optional { "?" } else { "" };
    format!(
        r"((?P<{name}>{NUMBER}){SPACE}*({suffix}){optional}{SPACE}*)?",
        name = unit.group_name()
    )
}

/// Source of the canonical matcher.
///
/// Groups must appear in the text in months, weeks, days, hours, minutes
/// order. The pattern is anchored at the start only, so a group written out
/// of order ends the match and is ignored.
pub fn standard_pattern() -> String {
    let mut pattern = directive();
    for unit in Unit::ALL {
        pattern.push_str(&quantity_group(unit));
    }
    pattern
}

/// One compiled directive shape.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    /// Capture index of each unit's quantity group, indexed by [`Unit`].
    slots: [Option<usize>; 5],
}

impl Matcher {
    /// Compiles a matcher from a regular expression.
    ///
    /// The pattern must name at least one group after a [`Unit`]
    /// (`months`, `weeks`, `days`, `hours` or `minutes`).
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(pattern)?;

        let mut slots = [None; 5];
        for unit in Unit::ALL {
            slots[unit.index()] = regex
                .capture_names()
                .position(|name| name == Some(unit.group_name()));
        }

        if slots.iter().all(Option::is_none) {
            return Err(GrammarError::NoQuantityGroups {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self { regex, slots })
    }

    /// The regular expression source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Capture index for `unit`, if this matcher exposes it.
    pub(crate) const fn slot(&self, unit: Unit) -> Option<usize> {
        self.slots[unit.index()]
    }
}

/// Ordered set of matchers, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    matchers: Vec<Matcher>,
}

impl Grammar {
    /// An empty grammar that matches nothing.
    pub const fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// The canonical `/spend` / `/spent` grammar.
    pub fn standard() -> Self {
        let matcher =
            Matcher::new(&standard_pattern()).expect("standard directive pattern is valid");
        Self::new().with_matcher(matcher)
    }

    /// Shared instance of [`Grammar::standard`], compiled on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Appends a compiled matcher with the lowest priority.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Compiles `pattern` and appends it with the lowest priority.
    pub fn push(&mut self, pattern: &str) -> Result<&mut Self, GrammarError> {
        let matcher = Matcher::new(pattern)?;
        tracing::debug!(pattern, priority = self.matchers.len(), "added directive matcher");
        self.matchers.push(matcher);
        Ok(self)
    }

    /// Matchers in priority order.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pattern_shape() {
        let pattern = standard_pattern();
        assert!(pattern.starts_with(r"^/spen[dt][\t\n\f\r ]+"));

        let positions: Vec<usize> = Unit::ALL
            .iter()
            .map(|u| pattern.find(&format!("(?P<{}>", u.group_name())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "groups must appear largest unit first");
    }

    #[test]
    fn standard_matcher_exposes_every_unit() {
        let grammar = Grammar::standard();
        assert_eq!(grammar.len(), 1);
        let matcher = &grammar.matchers()[0];
        for unit in Unit::ALL {
            assert!(matcher.slot(unit).is_some(), "missing group for {unit}");
        }
    }

    #[test]
    fn matcher_with_partial_groups() {
        let matcher = Matcher::new(r"^worked (?P<hours>\d+)h$").unwrap();
        assert!(matcher.slot(Unit::Hours).is_some());
        assert!(matcher.slot(Unit::Minutes).is_none());
        assert_eq!(matcher.pattern(), r"^worked (?P<hours>\d+)h$");
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Matcher::new(r"^/spend (").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("invalid directive pattern"));
    }

    #[test]
    fn pattern_without_quantity_groups_is_rejected() {
        let err = Matcher::new(r"^/spend (?P<amount>\d+)").unwrap_err();
        assert!(matches!(err, GrammarError::NoQuantityGroups { .. }));
    }

    #[test]
    fn push_appends_with_lowest_priority() {
        let mut grammar = Grammar::standard();
        grammar.push(r"^time: (?P<hours>\d+)h").unwrap();
        assert_eq!(grammar.len(), 2);
        assert_eq!(grammar.matchers()[1].pattern(), r"^time: (?P<hours>\d+)h");
    }

    #[test]
    fn push_failure_leaves_grammar_unchanged() {
        let mut grammar = Grammar::standard();
        assert!(grammar.push("(").is_err());
        assert_eq!(grammar.len(), 1);
    }

    #[test]
    fn empty_grammar() {
        let grammar = Grammar::new();
        assert!(grammar.is_empty());
        assert!(Grammar::default().is_empty());
    }

    #[test]
    fn global_is_standard() {
        assert_eq!(
            Grammar::global().matchers()[0].pattern(),
            standard_pattern()
        );
    }
}
