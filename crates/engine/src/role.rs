// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrently scheduled units of work

use async_trait::async_trait;
use tk_core::RoleId;
use tracing::Instrument;

/// Outcome counts of one pass through a role's loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Primitive operations that succeeded (permit taken, gate held,
    /// message moved, LED toggled)
    pub completed: u32,
    /// Operations that timed out
    pub timed_out: u32,
}

impl CycleReport {
    pub fn completed() -> Self {
        Self {
            completed: 1,
            timed_out: 0,
        }
    }

    pub fn timed_out() -> Self {
        Self {
            completed: 0,
            timed_out: 1,
        }
    }
}

/// One role's loop body, including its backoff sleep
#[async_trait]
pub trait Role: Send + 'static {
    fn id(&self) -> &RoleId;

    async fn run_cycle(&mut self) -> CycleReport;
}

/// Run `role` until the task is aborted
pub async fn run_forever<R: Role>(mut role: R) {
    let span = tracing::info_span!("role", role = %role.id());
    async move {
        tracing::info!("started");
        loop {
            let report = role.run_cycle().await;
            tracing::trace!(
                completed = report.completed,
                timed_out = report.timed_out,
                "cycle"
            );
        }
    }
    .instrument(span)
    .await
}
