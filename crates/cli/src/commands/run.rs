// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk run <demo> [--duration 10s]` - Run a demo on the simulated board

use crate::error::TkError;
use anyhow::Result;
use clap::Args;
use std::time::Duration;
use tk_adapters::SimBoard;
use tk_core::{Demo, DemoConfig};
use tk_engine::Orchestrator;

#[derive(Args)]
pub struct RunArgs {
    /// Demo to run (see `tk demos`)
    pub demo: String,

    /// Stop after this long (e.g. "10s", "1m"); runs until Ctrl-C otherwise
    #[arg(long, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,
}

pub async fn run(args: RunArgs, config: DemoConfig) -> Result<()> {
    let demo: Demo = args
        .demo
        .parse()
        .map_err(|_| TkError::unknown_demo(&args.demo))?;

    let board = SimBoard::new(config.adc.sweep_step);
    let orchestrator = Orchestrator::new(board, config);
    let mut running = orchestrator
        .start(demo)
        .map_err(|e| TkError::demo_start_failed(demo, e))?;

    let deadline = async {
        match args.duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending().await,
        }
    };

    let outcome = tokio::select! {
        signal = tokio::signal::ctrl_c() => interrupted(signal),
        _ = deadline => Ok(()),
        err = running.failure() => Err(TkError::demo_failed(demo, err)),
    };

    let count = running.shutdown().await;
    println!("Stopped {}: {} tasks ran", demo, count);

    outcome.map_err(Into::into)
}

/// A Ctrl-C that never got a handler is a failure, not a stop request
fn interrupted(signal: std::io::Result<()>) -> Result<(), TkError> {
    match signal {
        Ok(()) => {
            tracing::info!("interrupted");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for Ctrl-C");
            Err(TkError::signal_unavailable(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_stops_cleanly() {
        assert!(interrupted(Ok(())).is_ok());
    }

    #[test]
    fn missing_signal_handler_is_an_error() {
        let err = interrupted(Err(std::io::Error::other("no signal driver"))).unwrap_err();
        let output = err.to_string();
        assert!(output.contains("Ctrl-C"));
        assert!(output.contains("no signal driver"));
    }
}
