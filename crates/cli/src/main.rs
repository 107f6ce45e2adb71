// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tk - taskkit CLI
//!
//! Runs the firmware demos against a simulated board.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, demos, run};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::TkError;
use tk_core::DemoConfig;

#[derive(Parser)]
#[command(
    name = "tk",
    version,
    about = "taskkit - ESP32 RTOS demos on a simulated board"
)]
struct Cli {
    /// TOML configuration file (defaults reproduce the firmware constants)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo until interrupted
    Run(run::RunArgs),
    /// List available demos
    Demos(demos::DemosArgs),
    /// Show the effective configuration
    Config(config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TkError>() {
                Some(tk) => eprint!("{}", tk),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Completions must not depend on a readable config
    if let Commands::Completions(args) = &cli.command {
        completions::write_completions::<Cli>(args.shell, &mut std::io::stdout());
        return Ok(());
    }

    let _log_guard = logging::init(cli.log_file.as_deref())?;
    let config = DemoConfig::load(cli.config.as_deref())
        .map_err(|e| TkError::invalid_config(cli.config.as_deref(), e))?;

    match cli.command {
        Commands::Run(args) => run::run(args, config).await,
        Commands::Demos(args) => {
            demos::demos(args);
            Ok(())
        }
        Commands::Config(args) => config::show(args, &config),
        Commands::Completions(_) => Ok(()),
    }
}
