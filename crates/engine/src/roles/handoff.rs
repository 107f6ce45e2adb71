// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary hand-off roles

use super::Indicator;
use crate::actuator::Actuator;
use crate::handoff::BinaryHandoff;
use crate::role::{CycleReport, Role};
use async_trait::async_trait;
use std::time::Duration;
use tk_adapters::DigitalOutput;
use tk_core::RoleId;

/// Blinks, posts the permit, then backs off
pub struct HandoffProducer<O> {
    pub id: RoleId,
    pub actuator: Actuator<O>,
    pub handoff: BinaryHandoff,
    pub indicator: Indicator,
    pub backoff: Duration,
}

#[async_trait]
impl<O: DigitalOutput> Role for HandoffProducer<O> {
    fn id(&self) -> &RoleId {
        &self.id
    }

    async fn run_cycle(&mut self) -> CycleReport {
        self.actuator
            .run_indicator(self.indicator.cycles, self.indicator.half_period)
            .await;
        tracing::info!(role = %self.id, "giving the permit");
        self.handoff.post();
        tokio::time::sleep(self.backoff).await;
        CycleReport::completed()
    }
}

/// Waits for the permit, blinks when it arrives, always yields briefly
pub struct HandoffConsumer<O> {
    pub id: RoleId,
    pub actuator: Actuator<O>,
    pub handoff: BinaryHandoff,
    pub indicator: Indicator,
    pub timeout: Duration,
    pub yield_for: Duration,
}

#[async_trait]
impl<O: DigitalOutput> Role for HandoffConsumer<O> {
    fn id(&self) -> &RoleId {
        &self.id
    }

    async fn run_cycle(&mut self) -> CycleReport {
        let report = match self.handoff.wait(self.timeout).await {
            Ok(()) => {
                tracing::info!(role = %self.id, "working");
                self.actuator
                    .run_indicator(self.indicator.cycles, self.indicator.half_period)
                    .await;
                tracing::info!(role = %self.id, "entering into sleep");
                CycleReport::completed()
            }
            Err(e) => {
                tracing::info!(role = %self.id, error = %e, "no permit");
                CycleReport::timed_out()
            }
        };

        tracing::info!(role = %self.id, "sleeping");
        tokio::time::sleep(self.yield_for).await;
        report
    }
}
