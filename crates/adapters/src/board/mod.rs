// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board: the factory that hands out configured capabilities

mod sim;

pub use sim::SimBoard;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeBoard;

use crate::adc::AdcChannel;
use crate::output::{DigitalOutput, PinId};
use crate::pwm::PwmChannel;

/// Hardware a demo runs against.
///
/// Capabilities are resolved once at startup and then owned by the roles
/// that drive them.
pub trait Board: Clone + Send + Sync + 'static {
    type Output: DigitalOutput;
    type Pwm: PwmChannel;
    type Adc: AdcChannel;

    /// Configure `pin` as a push-pull output, initially low
    fn output(&self, pin: PinId, label: &str) -> Self::Output;

    /// Configure a 10-bit, 5 kHz PWM channel on `pin`, duty 0
    fn pwm(&self, channel: u8, pin: PinId) -> Self::Pwm;

    /// Configure a 12-bit ADC channel
    fn adc(&self, channel: u8) -> Self::Adc;
}
