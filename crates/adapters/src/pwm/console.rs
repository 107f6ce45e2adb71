// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated PWM channel

use super::{check_duty, PwmChannel, PwmError};
use crate::output::PinId;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

/// PWM channel that keeps the latched duty and logs it at debug level
#[derive(Clone, Debug)]
pub struct LogPwm {
    channel: u8,
    pin: PinId,
    duty: Arc<AtomicU16>,
}

impl LogPwm {
    pub fn new(channel: u8, pin: PinId) -> Self {
        Self {
            channel,
            pin,
            duty: Arc::new(AtomicU16::new(0)),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.load(Ordering::SeqCst)
    }
}

impl PwmChannel for LogPwm {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn set_duty(&self, duty: u16) -> Result<(), PwmError> {
        check_duty(self.channel, duty)?;
        self.duty.store(duty, Ordering::SeqCst);
        tracing::debug!(channel = self.channel, pin = %self.pin, duty, "pwm duty");
        Ok(())
    }
}
