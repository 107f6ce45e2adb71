// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! LEDs driven by roles

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tk_adapters::{DigitalOutput, PinId};
use tk_core::config::Led;

/// A digital output plus the level last written to it
#[derive(Clone, Debug)]
pub struct Actuator<O> {
    output: O,
    label: Arc<str>,
    high: Arc<AtomicBool>,
}

impl<O: DigitalOutput> Actuator<O> {
    /// Wrap `output` and drive it low
    pub fn new(output: O, label: &str) -> Self {
        output.set_level(false);
        Self {
            output,
            label: Arc::from(label),
            high: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pin(&self) -> PinId {
        self.output.pin()
    }

    pub fn is_high(&self) -> bool {
        self.high.load(Ordering::SeqCst)
    }

    pub fn set(&self, high: bool) {
        self.high.store(high, Ordering::SeqCst);
        self.output.set_level(high);
    }

    /// Invert the level and return the new one
    pub fn toggle(&self) -> bool {
        let high = !self.high.fetch_xor(true, Ordering::SeqCst);
        self.output.set_level(high);
        high
    }

    /// Blink `cycles` times (low, wait, high, wait), ending low
    pub async fn run_indicator(&self, cycles: u32, half_period: Duration) {
        for _ in 0..cycles {
            self.set(false);
            tokio::time::sleep(half_period).await;
            self.set(true);
            tokio::time::sleep(half_period).await;
        }
        self.set(false);
    }

    /// Wait half of `period`, light up, call `on_lit`, wait the other half,
    /// go dark
    pub async fn pulse(&self, period: Duration, on_lit: impl FnOnce()) {
        let half = period / 2;
        tokio::time::sleep(half).await;
        self.set(true);
        on_lit();
        tokio::time::sleep(half).await;
        self.set(false);
    }
}

/// The shared indicator LEDs behind the mutex demo's gate
#[derive(Clone, Debug)]
pub struct ActuatorBank<O> {
    actuators: Vec<(Led, Actuator<O>)>,
}

impl<O: DigitalOutput> ActuatorBank<O> {
    pub fn new(actuators: Vec<(Led, Actuator<O>)>) -> Self {
        Self { actuators }
    }

    pub fn get(&self, led: Led) -> Option<&Actuator<O>> {
        self.actuators
            .iter()
            .find(|(l, _)| *l == led)
            .map(|(_, a)| a)
    }

    /// Run the indicator pattern on `led`; false if the bank has no such LED
    pub async fn run_indicator(&self, led: Led, cycles: u32, half_period: Duration) -> bool {
        match self.get(led) {
            Some(actuator) => {
                actuator.run_indicator(cycles, half_period).await;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "actuator_tests.rs"]
mod tests;
