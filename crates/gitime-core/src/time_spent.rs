//! Accumulated time, as logged by directives.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::unit::Unit;

/// Time spent, kept per unit rather than normalized.
///
/// Each field is a non-negative quantity as written in directives, so
/// `/spend 90m` stays 90 minutes instead of becoming 1.5 hours. Use
/// [`TimeSpent::to_minutes`] to collapse it onto the work calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TimeSpent {
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
}

impl TimeSpent {
    /// The zero value.
    pub const ZERO: Self = Self {
        months: 0.0,
        weeks: 0.0,
        days: 0.0,
        hours: 0.0,
        minutes: 0.0,
    };

    /// Creates a value with a single unit set.
    #[must_use]
    pub fn from_unit(unit: Unit, value: f64) -> Self {
        let mut ts = Self::ZERO;
        *ts.get_mut(unit) = value;
        ts
    }

    /// Returns the quantity recorded for `unit`.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
        }
    }

    pub(crate) const fn get_mut(&mut self, unit: Unit) -> &mut f64 {
        match unit {
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
        }
    }

    /// True when no time is recorded in any unit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Unit::ALL.iter().all(|&unit| self.get(unit) == 0.0)
    }

    /// Total minutes on the work calendar, fractional remainder discarded.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn to_minutes(&self) -> u64 {
        let minutes = Unit::ALL
            .iter()
            .rev()
            .fold(0.0, |acc, &unit| {
                acc + self.get(unit) * f64::from(unit.minutes_per_unit())
            });
        minutes as u64
    }
}

impl Add for TimeSpent {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for TimeSpent {
    fn add_assign(&mut self, rhs: Self) {
        self.months += rhs.months;
        self.weeks += rhs.weeks;
        self.days += rhs.days;
        self.hours += rhs.hours;
        self.minutes += rhs.minutes;
    }
}

impl Sum for TimeSpent {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a TimeSpent> for TimeSpent {
    fn sum<I: Iterator<Item = &'a TimeSpent>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Renders the non-zero units largest first, e.g. `1.0 hour 30.0 minutes`.
///
/// Units are pluralized from 2.0 upwards. The zero value renders as an
/// empty string.
impl fmt::Display for TimeSpent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for unit in Unit::ALL {
            let value = self.get(unit);
            if value <= 0.0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{value:.1} {}", unit.singular())?;
            if value >= 2.0 {
                f.write_str("s")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn sample() -> TimeSpent {
        TimeSpent {
            months: 1.0,
            weeks: 0.5,
            days: 2.0,
            hours: 1.5,
            minutes: 45.0,
        }
    }

    #[test]
    fn zero_is_identity_for_add() {
        let ts = sample();
        assert_eq!(TimeSpent::ZERO + ts, ts);
        assert_eq!(ts + TimeSpent::default(), ts);
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let a = sample();
        let b = TimeSpent::from_unit(Unit::Hours, 2.0);
        let c = TimeSpent::from_unit(Unit::Minutes, 15.0);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn add_assign_sums_each_field() {
        let mut ts = TimeSpent::from_unit(Unit::Days, 1.0);
        ts += sample();
        assert_eq!(ts.days, 3.0);
        assert_eq!(ts.months, 1.0);
        assert_eq!(ts.minutes, 45.0);
    }

    #[test]
    fn sum_folds_values() {
        let values = [
            TimeSpent::from_unit(Unit::Hours, 1.0),
            TimeSpent::from_unit(Unit::Minutes, 30.0),
            TimeSpent::from_unit(Unit::Hours, 0.5),
        ];
        let total: TimeSpent = values.iter().sum();
        assert_eq!(total.hours, 1.5);
        assert_eq!(total.minutes, 30.0);

        let empty: TimeSpent = std::iter::empty::<TimeSpent>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn to_minutes_uses_work_calendar() {
        assert_eq!(TimeSpent::from_unit(Unit::Minutes, 1.0).to_minutes(), 1);
        assert_eq!(TimeSpent::from_unit(Unit::Hours, 1.0).to_minutes(), 60);
        assert_eq!(TimeSpent::from_unit(Unit::Days, 1.0).to_minutes(), 480);
        assert_eq!(TimeSpent::from_unit(Unit::Weeks, 1.0).to_minutes(), 2400);
        assert_eq!(TimeSpent::from_unit(Unit::Months, 1.0).to_minutes(), 9600);
        assert_eq!(sample().to_minutes(), 9600 + 1200 + 960 + 90 + 45);
    }

    #[test]
    fn to_minutes_truncates() {
        assert_eq!(TimeSpent::from_unit(Unit::Minutes, 1.9).to_minutes(), 1);
        // 0.01h is 0.6 minutes
        assert_eq!(TimeSpent::from_unit(Unit::Hours, 0.01).to_minutes(), 0);
        assert_eq!(TimeSpent::ZERO.to_minutes(), 0);
    }

    #[test]
    fn display_pluralizes_from_two() {
        assert_eq!(TimeSpent::from_unit(Unit::Hours, 1.0).to_string(), "1.0 hour");
        assert_eq!(TimeSpent::from_unit(Unit::Hours, 1.9).to_string(), "1.9 hour");
        assert_eq!(TimeSpent::from_unit(Unit::Hours, 2.0).to_string(), "2.0 hours");
        assert_eq!(TimeSpent::from_unit(Unit::Weeks, 0.5).to_string(), "0.5 week");
    }

    #[test]
    fn display_omits_zero_units() {
        assert_eq!(TimeSpent::ZERO.to_string(), "");
        let ts = TimeSpent::from_unit(Unit::Months, 3.0) + TimeSpent::from_unit(Unit::Minutes, 5.0);
        assert_eq!(ts.to_string(), "3.0 months 5.0 minutes");
    }

    #[test]
    fn display_all_units() {
        assert_snapshot!(sample().to_string(), @"1.0 month 0.5 week 2.0 days 1.5 hour 45.0 minutes");
    }

    #[test]
    fn serializes_unit_fields() {
        let json = serde_json::to_string(&TimeSpent::from_unit(Unit::Days, 2.0)).unwrap();
        assert_eq!(
            json,
            r#"{"months":0.0,"weeks":0.0,"days":2.0,"hours":0.0,"minutes":0.0}"#
        );
    }
}
