// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gate contention role

use super::Indicator;
use crate::actuator::ActuatorBank;
use crate::gate::SharedGate;
use crate::role::{CycleReport, Role};
use async_trait::async_trait;
use std::time::Duration;
use tk_adapters::DigitalOutput;
use tk_core::config::Led;
use tk_core::RoleId;

/// Tries to take the shared LEDs, blinks its own LED while holding them,
/// then backs off whether or not it got in
pub struct Contender<O> {
    pub id: RoleId,
    pub gate: SharedGate<ActuatorBank<O>>,
    pub led: Led,
    pub indicator: Indicator,
    pub acquire_timeout: Duration,
    pub backoff: Duration,
}

#[async_trait]
impl<O: DigitalOutput> Role for Contender<O> {
    fn id(&self) -> &RoleId {
        &self.id
    }

    async fn run_cycle(&mut self) -> CycleReport {
        let report = match self.gate.try_acquire(&self.id, self.acquire_timeout).await {
            Ok(bank) => {
                tracing::info!(role = %self.id, led = %self.led, "took the resource");
                let Indicator {
                    cycles,
                    half_period,
                } = self.indicator;
                if !bank.run_indicator(self.led, cycles, half_period).await {
                    tracing::warn!(role = %self.id, led = %self.led, "led not in the shared bank");
                }
                tracing::debug!(
                    role = %self.id,
                    held_ms = bank.held_for().as_millis() as u64,
                    "releasing"
                );
                bank.release();
                CycleReport::completed()
            }
            Err(_) => CycleReport::timed_out(),
        };

        tokio::time::sleep(self.backoff).await;
        report
    }
}
