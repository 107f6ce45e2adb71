// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::actuator::Actuator;
use crate::role::{CycleReport, Role};
use async_trait::async_trait;
use std::time::Duration;
use tk_adapters::DigitalOutput;
use tk_core::RoleId;

/// Low for `half_period`, high for `half_period`, forever
pub struct Blinker<O> {
    pub id: RoleId,
    pub actuator: Actuator<O>,
    pub half_period: Duration,
}

#[async_trait]
impl<O: DigitalOutput> Role for Blinker<O> {
    fn id(&self) -> &RoleId {
        &self.id
    }

    async fn run_cycle(&mut self) -> CycleReport {
        self.actuator.set(false);
        tokio::time::sleep(self.half_period).await;
        self.actuator.set(true);
        tokio::time::sleep(self.half_period).await;
        CycleReport::completed()
    }
}
