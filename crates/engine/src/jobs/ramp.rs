// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::periodic::PeriodicJob;
use tk_adapters::PwmChannel;
use tk_core::signal::DutyRamp;

/// Steps each channel's duty every tick, wrapping past the maximum
pub struct DutyRampJob<P> {
    channels: Vec<(P, DutyRamp)>,
}

impl<P: PwmChannel> DutyRampJob<P> {
    /// Latch each channel's initial duty
    pub fn new(channels: Vec<(P, DutyRamp)>) -> Self {
        for (pwm, ramp) in &channels {
            if let Err(e) = pwm.set_duty(ramp.duty()) {
                tracing::error!(channel = pwm.channel(), error = %e, "initial duty rejected");
            }
        }
        Self { channels }
    }

    pub fn duties(&self) -> Vec<u16> {
        self.channels.iter().map(|(_, ramp)| ramp.duty()).collect()
    }
}

impl<P: PwmChannel> PeriodicJob for DutyRampJob<P> {
    fn name(&self) -> &str {
        "duty-ramp"
    }

    fn tick(&mut self) {
        for (pwm, ramp) in &mut self.channels {
            let duty = ramp.advance();
            if let Err(e) = pwm.set_duty(duty) {
                tracing::error!(channel = pwm.channel(), error = %e, "set duty failed");
            }
        }
    }
}
