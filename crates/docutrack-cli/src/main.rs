//! DocuTrack CLI - Command-line interface for contract field extraction.

use clap::Parser;
use docutrack_cli::commands;
use docutrack_cli::{Cli, Command, Config, Formatter};
use docutrack_extractor::Extractor;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> docutrack_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    debug!("Loaded configuration from {}", config_path.display());

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let extractor = Extractor::try_new(config.extractor.clone())?;

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, Arc::new(extractor), &formatter).await?;
        }
        Command::Fields(args) => {
            commands::execute_fields(args, &extractor, &formatter)?;
        }
        Command::Text(args) => {
            commands::execute_text(args, &extractor).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
