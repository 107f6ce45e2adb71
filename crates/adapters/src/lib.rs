// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Hardware capabilities the demos drive: GPIO outputs, PWM channels and ADC
//! channels, with simulated and fake implementations.

pub mod adc;
pub mod board;
pub mod output;
pub mod pwm;
pub mod traced;

pub use adc::{AdcChannel, AdcError, SweepAdc};
pub use board::{Board, SimBoard};
pub use output::{DigitalOutput, LogOutput, PinId};
pub use pwm::{LogPwm, PwmChannel, PwmError};
pub use traced::{TracedAdc, TracedOutput, TracedPwm};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use adc::FakeAdc;
#[cfg(any(test, feature = "test-support"))]
pub use board::FakeBoard;
#[cfg(any(test, feature = "test-support"))]
pub use output::{FakeOutput, LevelChange};
#[cfg(any(test, feature = "test-support"))]
pub use pwm::{DutyChange, FakePwm};
