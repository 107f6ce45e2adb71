// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic jobs: timer callbacks with state owned by the job

use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::Instrument;

/// Work run once per period. `tick` must not block.
pub trait PeriodicJob: Send + 'static {
    fn name(&self) -> &str;

    fn tick(&mut self);
}

/// Tick `job` every `period`, first one period from now, until the task is
/// aborted. `period` must be non-zero.
pub async fn run_periodic<J: PeriodicJob>(mut job: J, period: Duration) {
    let span = tracing::info_span!("job", job = job.name());
    async move {
        tracing::info!(period_ms = period.as_millis() as u64, "timer started");
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            job.tick();
        }
    }
    .instrument(span)
    .await
}
