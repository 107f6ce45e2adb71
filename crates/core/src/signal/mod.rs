// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal arithmetic for the peripheral demos
//!
//! - **DutyRamp** - sawtooth PWM duty that wraps past the maximum
//! - **LedLevels** - potentiometer band to LED levels
//! - **BlinkCounter** - wrapping counter with a log severity per range

pub mod band;
pub mod counter;
pub mod ramp;

pub use band::{band_of, LedLevels};
pub use counter::{BlinkCounter, Severity};
pub use ramp::DutyRamp;

/// Highest duty accepted by a 10-bit PWM channel
pub const MAX_DUTY: u16 = 1023;

/// Highest raw sample of a 12-bit ADC
pub const ADC_MAX: u16 = 4095;
