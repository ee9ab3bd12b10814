//! Time units recognized in directives, and the work calendar linking them.

use std::fmt;

/// A unit of logged time.
///
/// Variants are declared in canonical directive order, which is also the
/// order used when rendering a [`TimeSpent`](crate::TimeSpent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
}

impl Unit {
    /// All units, largest first.
    pub const ALL: [Self; 5] = [
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
    ];

    /// Name of the capture group carrying this unit's quantity in a matcher.
    #[must_use]
    pub const fn group_name(self) -> &'static str {
        match self {
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
        }
    }

    /// Singular English name used when rendering.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Months => "month",
            Self::Weeks => "week",
            Self::Days => "day",
            Self::Hours => "hour",
            Self::Minutes => "minute",
        }
    }

    /// Minutes in one of this unit on the work calendar.
    ///
    /// An hour is 60 minutes, a day 8 hours, a week 5 days and a month 4 weeks.
    #[must_use]
    pub const fn minutes_per_unit(self) -> u32 {
        match self {
            Self::Minutes => 1,
            Self::Hours => 60,
            Self::Days => 8 * 60,
            Self::Weeks => 5 * 8 * 60,
            Self::Months => 4 * 5 * 8 * 60,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}
