// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! PWM duty ramp

use super::MAX_DUTY;

/// Duty that grows by a fixed step each tick and restarts at zero once it
/// passes the maximum
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DutyRamp {
    duty: u16,
    step: u16,
    max: u16,
}

impl DutyRamp {
    pub fn new(initial: u16, step: u16) -> Self {
        Self {
            duty: initial.min(MAX_DUTY),
            step,
            max: MAX_DUTY,
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Step forward and return the new duty
    pub fn advance(&mut self) -> u16 {
        let next = self.duty.saturating_add(self.step);
        self.duty = if next > self.max { 0 } else { next };
        self.duty
    }
}

#[cfg(test)]
#[path = "ramp_tests.rs"]
mod tests;
