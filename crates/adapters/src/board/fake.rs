// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake board for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::Board;
use crate::adc::FakeAdc;
use crate::output::{FakeOutput, PinId};
use crate::pwm::FakePwm;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeBoardState {
    outputs: HashMap<PinId, FakeOutput>,
    pwms: HashMap<u8, FakePwm>,
    adcs: HashMap<u8, FakeAdc>,
}

/// Board that hands out fakes and keeps a handle to each one for inspection.
///
/// Asking twice for the same pin or channel returns clones of one fake.
#[derive(Clone, Default)]
pub struct FakeBoard {
    inner: Arc<Mutex<FakeBoardState>>,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The output configured on `gpio`, if any
    pub fn output_for(&self, gpio: u8) -> Option<FakeOutput> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .outputs
            .get(&PinId(gpio))
            .cloned()
    }

    /// The PWM channel configured as `channel`, if any
    pub fn pwm_for(&self, channel: u8) -> Option<FakePwm> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pwms
            .get(&channel)
            .cloned()
    }

    /// Script samples for an ADC channel, creating it if needed
    pub fn push_adc_samples(&self, channel: u8, samples: impl IntoIterator<Item = u16>) {
        let adc = self.adc(channel);
        adc.push_samples(samples);
    }
}

impl Board for FakeBoard {
    type Output = FakeOutput;
    type Pwm = FakePwm;
    type Adc = FakeAdc;

    fn output(&self, pin: PinId, _label: &str) -> Self::Output {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .outputs
            .entry(pin)
            .or_insert_with(|| FakeOutput::new(pin))
            .clone()
    }

    fn pwm(&self, channel: u8, _pin: PinId) -> Self::Pwm {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pwms
            .entry(channel)
            .or_insert_with(|| FakePwm::new(channel))
            .clone()
    }

    fn adc(&self, channel: u8) -> Self::Adc {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .adcs
            .entry(channel)
            .or_insert_with(|| FakeAdc::new(channel))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdcChannel, DigitalOutput};

    #[test]
    fn same_pin_returns_shared_fake() {
        let board = FakeBoard::new();
        let a = board.output(PinId(33), "red");
        let b = board.output(PinId(33), "red");

        a.set_level(true);
        assert!(b.is_high());
        assert_eq!(board.output_for(33).unwrap().levels(), vec![true]);
        assert!(board.output_for(25).is_none());
    }

    #[test]
    fn scripted_adc_samples_reach_handed_out_channel() {
        let board = FakeBoard::new();
        let adc = board.adc(4);
        board.push_adc_samples(4, [1500]);
        assert_eq!(adc.read_raw(), Ok(1500));
    }
}
