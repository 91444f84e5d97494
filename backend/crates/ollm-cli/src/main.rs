//! ollm - session console
//!
//! Wires the process-wide session store and drives it from stdin.
//!
//! # Examples
//!
//! ```bash
//! # Interactive console
//! ollm console
//!
//! # Show dev-server settings for the prod profile
//! ollm --env prod config --pretty
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use ollm_cli::{CliError, CliErrorResult, Console, config_view, logger};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use ollm_config::Config;
use ollm_session::SessionStore;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliErrorResult<()> {
    // Load and validate configuration
    let config = Config::load_profile(cli.env)?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            CliError::io(format!("Failed to create log directory {}", log_dir.display()), e)
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ollm v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match cli.command {
        Commands::Console => {
            // The one session store for this process
            let store = SessionStore::new();
            let stdin = std::io::stdin();
            Console::new(store, stdin.lock(), std::io::stdout()).run()
        }
        Commands::Config => {
            println!("{}", config_view::render(&config, cli.pretty)?);
            Ok(())
        }
    }
}
