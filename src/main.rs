// src/main.rs

use anyhow::Result;
use clap::Parser;
use exhibit::cli::Cli;
use exhibit::config::ConfigBuilder;
use exhibit::errors::Error;
#[cfg(feature = "progress")]
use exhibit::progress::IndicatifProgress;
use exhibit::progress::ProgressReporter;
use exhibit::signal::setup_signal_handler;
use exhibit::{run, RunOutcome};
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "exhibit=debug".parse().unwrap()
                } else {
                    "exhibit=info".parse().unwrap()
                },
            ),
        )
        .init();

    log::info!("Starting exhibit v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // Show a progress bar only if stderr is a TTY.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).and_then(|builder| builder.build()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    match run(&config, &token, progress_reporter) {
        Ok(RunOutcome::Saved(saved)) => {
            log::info!("Done. Document saved to {}", saved.document_path.display());
        }
        Ok(RunOutcome::DryRun { files }) => {
            log::info!("Dry run complete: {} files would be extracted.", files.len());
        }
        // --- Error Handling ---
        Err(Error::SourceNotFound(path)) => {
            eprintln!("Error: Source directory does not exist: {}", path.display());
            std::process::exit(2);
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
