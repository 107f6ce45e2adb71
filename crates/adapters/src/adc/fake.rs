// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake ADC channel for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AdcChannel, AdcError, ADC_MAX};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct FakeAdcState {
    samples: VecDeque<u16>,
    reads: usize,
}

/// Fake ADC that replays scripted samples, failing once they run out
#[derive(Clone, Debug)]
pub struct FakeAdc {
    channel: u8,
    inner: Arc<Mutex<FakeAdcState>>,
}

impl FakeAdc {
    pub fn new(channel: u8) -> Self {
        Self {
            channel,
            inner: Arc::new(Mutex::new(FakeAdcState::default())),
        }
    }

    /// Queue samples to be returned by subsequent reads
    pub fn push_samples(&self, samples: impl IntoIterator<Item = u16>) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .samples
            .extend(samples);
    }

    /// Number of read attempts so far
    pub fn reads(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).reads
    }
}

impl AdcChannel for FakeAdc {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn read_raw(&self) -> Result<u16, AdcError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.reads += 1;
        let raw = inner
            .samples
            .pop_front()
            .ok_or(AdcError::NoSample(self.channel))?;
        if raw > ADC_MAX {
            return Err(AdcError::OutOfRange { raw });
        }
        Ok(raw)
    }
}
