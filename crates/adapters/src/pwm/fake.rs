// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake PWM channel for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{check_duty, PwmChannel, PwmError};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Recorded duty write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyChange {
    pub duty: u16,
    pub at: Instant,
}

/// Fake PWM channel that records accepted duties
#[derive(Clone, Debug)]
pub struct FakePwm {
    channel: u8,
    writes: Arc<Mutex<Vec<DutyChange>>>,
}

impl FakePwm {
    pub fn new(channel: u8) -> Self {
        Self {
            channel,
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Accepted duties in order
    pub fn duties(&self) -> Vec<u16> {
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|w| w.duty)
            .collect()
    }

    pub fn writes(&self) -> Vec<DutyChange> {
        self.writes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl PwmChannel for FakePwm {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn set_duty(&self, duty: u16) -> Result<(), PwmError> {
        check_duty(self.channel, duty)?;
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DutyChange {
                duty,
                at: Instant::now(),
            });
        Ok(())
    }
}
