// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status LED blink jobs

use crate::actuator::Actuator;
use crate::periodic::PeriodicJob;
use tk_adapters::DigitalOutput;
use tk_core::signal::{BlinkCounter, Severity};

fn level_name(high: bool) -> &'static str {
    if high {
        "HIGH"
    } else {
        "LOW"
    }
}

/// Timer callback that toggles an LED
pub struct ToggleJob<O> {
    actuator: Actuator<O>,
}

impl<O: DigitalOutput> ToggleJob<O> {
    pub fn new(actuator: Actuator<O>) -> Self {
        Self { actuator }
    }
}

impl<O: DigitalOutput> PeriodicJob for ToggleJob<O> {
    fn name(&self) -> &str {
        "toggle"
    }

    fn tick(&mut self) {
        tracing::info!("event was called from timer");
        self.actuator.toggle();
    }
}

/// Toggles an LED and logs a wrapping counter at a severity that rises
/// with the count
pub struct CounterBlinkJob<O> {
    actuator: Actuator<O>,
    counter: BlinkCounter,
}

impl<O: DigitalOutput> CounterBlinkJob<O> {
    pub fn new(actuator: Actuator<O>, wrap_after: u32) -> Self {
        Self {
            actuator,
            counter: BlinkCounter::new(wrap_after),
        }
    }

    pub fn count(&self) -> u32 {
        self.counter.count()
    }
}

impl<O: DigitalOutput> PeriodicJob for CounterBlinkJob<O> {
    fn name(&self) -> &str {
        "counter-blink"
    }

    fn tick(&mut self) {
        let high = self.actuator.toggle();
        tracing::info!(level = level_name(high), "led status");

        let (value, severity) = self.counter.step();
        match severity {
            Severity::Info => tracing::info!(value, "counter"),
            Severity::Warn => tracing::warn!(value, "counter"),
            Severity::Error => tracing::error!(value, "counter"),
        }
    }
}
