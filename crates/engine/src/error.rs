// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for starting and supervising demos

use thiserror::Error;
use tk_core::{ChannelError, ConfigError, Demo};

/// Errors that stop a demo
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create primitive: {0}")]
    Channel(#[from] ChannelError),
    #[error("a task of demo {0} exited")]
    TaskExited(Demo),
    #[error("task failed: {0}")]
    TaskFailed(String),
}
