// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::actuator::Actuator;
use crate::periodic::PeriodicJob;
use tk_adapters::{AdcChannel, DigitalOutput};
use tk_core::signal::LedLevels;

/// Samples a potentiometer and lights red/green/blue by band
pub struct AdcLevelJob<A, O> {
    adc: A,
    red: Actuator<O>,
    green: Actuator<O>,
    blue: Actuator<O>,
    band_width: u16,
}

impl<A: AdcChannel, O: DigitalOutput> AdcLevelJob<A, O> {
    pub fn new(
        adc: A,
        [red, green, blue]: [Actuator<O>; 3],
        band_width: u16,
    ) -> Self {
        Self {
            adc,
            red,
            green,
            blue,
            band_width,
        }
    }
}

impl<A: AdcChannel, O: DigitalOutput> PeriodicJob for AdcLevelJob<A, O> {
    fn name(&self) -> &str {
        "adc-level"
    }

    fn tick(&mut self) {
        let raw = match self.adc.read_raw() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(channel = self.adc.channel(), error = %e, "sample skipped");
                return;
            }
        };
        tracing::info!(value = raw, "ADC raw value");

        let levels = LedLevels::for_sample(raw, self.band_width);
        self.red.set(levels.red);
        self.green.set(levels.green);
        self.blue.set(levels.blue);
    }
}
