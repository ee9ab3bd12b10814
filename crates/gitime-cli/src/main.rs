use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitime_cli::commands::{report, scan};
use gitime_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Report(args)) => {
            let config = load_config(cli.config.as_deref())?;
            report::run(&mut out, args, &config)?;
        }
        Some(Commands::Scan { json }) => {
            scan::run(std::io::stdin().lock(), &mut out, *json)?;
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            report::run(&mut out, &report::ReportArgs::default(), &config)?;
        }
    }

    Ok(())
}
