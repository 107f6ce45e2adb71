// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated potentiometer

use super::{AdcChannel, AdcError, ADC_MAX};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct SweepState {
    value: u16,
    rising: bool,
}

/// ADC channel that sweeps a triangle wave over the full 12-bit range.
///
/// Each read returns the current value and then moves it by `step`,
/// bouncing off 0 and `ADC_MAX`.
#[derive(Clone, Debug)]
pub struct SweepAdc {
    channel: u8,
    step: u16,
    state: Arc<Mutex<SweepState>>,
}

impl SweepAdc {
    pub fn new(channel: u8, step: u16) -> Self {
        Self {
            channel,
            step: step.max(1),
            state: Arc::new(Mutex::new(SweepState {
                value: 0,
                rising: true,
            })),
        }
    }
}

impl AdcChannel for SweepAdc {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn read_raw(&self) -> Result<u16, AdcError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let sample = state.value;

        if state.rising {
            let next = state.value.saturating_add(self.step);
            if next >= ADC_MAX {
                state.value = ADC_MAX;
                state.rising = false;
            } else {
                state.value = next;
            }
        } else {
            let next = state.value.saturating_sub(self.step);
            if next == 0 {
                state.rising = true;
            }
            state.value = next;
        }

        Ok(sample)
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
