// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ADC input channels

mod sweep;

pub use sweep::SweepAdc;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAdc;

use thiserror::Error;
pub use tk_core::signal::ADC_MAX;

/// Errors from ADC reads
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdcError {
    #[error("no sample available on channel {0}")]
    NoSample(u8),
    #[error("raw sample {raw} exceeds 12-bit range")]
    OutOfRange { raw: u16 },
}

/// A 12-bit ADC channel with 11 dB attenuation
pub trait AdcChannel: Clone + Send + Sync + 'static {
    /// Channel number
    fn channel(&self) -> u8;

    /// One raw conversion in 0..=ADC_MAX
    fn read_raw(&self) -> Result<u16, AdcError>;
}
