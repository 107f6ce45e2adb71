// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk demos` - List the runnable demos

use crate::output::{print_list, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use tk_core::Demo;

#[derive(Args)]
pub struct DemosArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct DemoEntry {
    name: &'static str,
    description: &'static str,
}

impl fmt::Display for DemoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {}", self.name, self.description)
    }
}

pub fn demos(args: DemosArgs) {
    let entries: Vec<DemoEntry> = Demo::ALL
        .iter()
        .map(|demo| DemoEntry {
            name: demo.name(),
            description: demo.description(),
        })
        .collect();
    print_list(&entries, args.format);
}
