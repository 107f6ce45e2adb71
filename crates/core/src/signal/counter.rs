// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wrapping counter for the logging blink demo

use serde::Serialize;

/// Log severity chosen for a counter value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Counter that restarts at zero once it exceeds `wrap_after`
#[derive(Clone, Copy, Debug)]
pub struct BlinkCounter {
    count: u32,
    wrap_after: u32,
}

impl BlinkCounter {
    pub fn new(wrap_after: u32) -> Self {
        Self {
            count: 0,
            wrap_after,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Increment, wrap, and classify the new value
    pub fn step(&mut self) -> (u32, Severity) {
        self.count += 1;
        if self.count > self.wrap_after {
            self.count = 0;
        }
        (self.count, Self::severity(self.count))
    }

    /// Below 10 is informational, below 20 a warning, anything else an error
    pub fn severity(count: u32) -> Severity {
        match count {
            0..=9 => Severity::Info,
            10..=19 => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
