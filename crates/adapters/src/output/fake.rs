// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake output for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DigitalOutput, PinId};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Recorded level write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub high: bool,
    /// Tokio time, so paused-clock tests can check pacing
    pub at: Instant,
}

/// Fake output that records every write
#[derive(Clone, Debug)]
pub struct FakeOutput {
    pin: PinId,
    writes: Arc<Mutex<Vec<LevelChange>>>,
}

impl FakeOutput {
    pub fn new(pin: PinId) -> Self {
        Self {
            pin,
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All writes in order
    pub fn writes(&self) -> Vec<LevelChange> {
        self.writes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Written levels in order
    pub fn levels(&self) -> Vec<bool> {
        self.writes().iter().map(|w| w.high).collect()
    }

    /// Last written level (low if never written)
    pub fn is_high(&self) -> bool {
        self.writes().last().is_some_and(|w| w.high)
    }

    /// Number of low-to-high edges
    pub fn rising_edges(&self) -> usize {
        let levels = self.levels();
        let mut prev = false;
        let mut edges = 0;
        for high in levels {
            if high && !prev {
                edges += 1;
            }
            prev = high;
        }
        edges
    }
}

impl DigitalOutput for FakeOutput {
    fn pin(&self) -> PinId {
        self.pin
    }

    fn set_level(&self, high: bool) {
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LevelChange {
                high,
                at: Instant::now(),
            });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
