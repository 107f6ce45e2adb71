// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk config` - Print the effective configuration

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use tk_core::DemoConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Output format (text prints TOML)
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn show(args: ConfigArgs, config: &DemoConfig) -> Result<()> {
    let rendered = match args.format {
        OutputFormat::Text => toml::to_string_pretty(config)?,
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
