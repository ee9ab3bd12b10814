//! gitime CLI library.
//!
//! This crate provides the CLI interface for gitime.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
