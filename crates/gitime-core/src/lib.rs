//! Core logic for gitime.
//!
//! This crate contains:
//! - `TimeSpent`: time logged per unit, with work-calendar conversion and rendering
//! - Directive grammar: the ordered matchers recognizing `/spend` lines
//! - Extraction: reading directives out of lines, messages and commits

mod commit;
mod extract;
pub mod grammar;
mod time_spent;
mod unit;

pub use commit::{Commit, CommitTimeSpent, breakdown, total};
pub use extract::collect_time_spent;
pub use grammar::{Grammar, GrammarError, Matcher};
pub use time_spent::TimeSpent;
pub use unit::Unit;
