// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! PWM (LEDC) channels

mod console;

pub use console::LogPwm;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DutyChange, FakePwm};

use thiserror::Error;
pub use tk_core::signal::MAX_DUTY;

/// Errors from PWM operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PwmError {
    #[error("duty {duty} out of range for channel {channel} (max {max})")]
    DutyOutOfRange { channel: u8, duty: u16, max: u16 },
}

/// A 10-bit PWM channel bound to one pin
pub trait PwmChannel: Clone + Send + Sync + 'static {
    /// Channel number
    fn channel(&self) -> u8;

    /// Set and latch a new duty (0..=MAX_DUTY)
    fn set_duty(&self, duty: u16) -> Result<(), PwmError>;
}

/// Shared range check for implementations
pub(crate) fn check_duty(channel: u8, duty: u16) -> Result<(), PwmError> {
    if duty > MAX_DUTY {
        return Err(PwmError::DutyOutOfRange {
            channel,
            duty,
            max: MAX_DUTY,
        });
    }
    Ok(())
}
