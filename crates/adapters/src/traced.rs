// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced capability wrappers for consistent observability

use crate::adc::{AdcChannel, AdcError};
use crate::output::{DigitalOutput, PinId};
use crate::pwm::{PwmChannel, PwmError};

/// Wrapper that adds tracing to any DigitalOutput
#[derive(Clone, Debug)]
pub struct TracedOutput<O> {
    inner: O,
}

impl<O> TracedOutput<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: DigitalOutput> DigitalOutput for TracedOutput<O> {
    fn pin(&self) -> PinId {
        self.inner.pin()
    }

    fn set_level(&self, high: bool) {
        tracing::trace!(pin = %self.inner.pin(), high, "output.set_level");
        self.inner.set_level(high);
    }
}

/// Wrapper that adds tracing to any PwmChannel
#[derive(Clone, Debug)]
pub struct TracedPwm<P> {
    inner: P,
}

impl<P> TracedPwm<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: PwmChannel> PwmChannel for TracedPwm<P> {
    fn channel(&self) -> u8 {
        self.inner.channel()
    }

    fn set_duty(&self, duty: u16) -> Result<(), PwmError> {
        let span = tracing::debug_span!("pwm.set_duty", channel = self.inner.channel(), duty);
        let _guard = span.enter();

        let result = self.inner.set_duty(duty);
        match &result {
            Ok(()) => tracing::trace!("latched"),
            Err(e) => tracing::error!(error = %e, "set_duty failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any AdcChannel
#[derive(Clone, Debug)]
pub struct TracedAdc<A> {
    inner: A,
}

impl<A> TracedAdc<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: AdcChannel> AdcChannel for TracedAdc<A> {
    fn channel(&self) -> u8 {
        self.inner.channel()
    }

    fn read_raw(&self) -> Result<u16, AdcError> {
        let span = tracing::debug_span!("adc.read", channel = self.inner.channel());
        let _guard = span.enter();

        let result = self.inner.read_raw();
        match &result {
            Ok(raw) => tracing::debug!(raw, "sampled"),
            Err(e) => tracing::warn!(error = %e, "read failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
