// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated LED that reports level changes through the log

use super::{DigitalOutput, PinId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Output whose only visible effect is an info line per level change
#[derive(Clone, Debug)]
pub struct LogOutput {
    pin: PinId,
    label: Arc<str>,
    level: Arc<AtomicBool>,
}

impl LogOutput {
    /// New output, initially low
    pub fn new(pin: PinId, label: &str) -> Self {
        Self {
            pin,
            label: Arc::from(label),
            level: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_high(&self) -> bool {
        self.level.load(Ordering::SeqCst)
    }
}

impl DigitalOutput for LogOutput {
    fn pin(&self) -> PinId {
        self.pin
    }

    fn set_level(&self, high: bool) {
        let previous = self.level.swap(high, Ordering::SeqCst);
        if previous != high {
            tracing::info!(
                pin = %self.pin,
                led = %self.label,
                level = if high { "HIGH" } else { "LOW" },
                "led"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_low_and_tracks_level() {
        let out = LogOutput::new(PinId(2), "status");
        assert!(!out.is_high());
        out.set_level(true);
        assert!(out.is_high());
        out.set_level(false);
        assert!(!out.is_high());
    }

    #[test]
    fn clones_share_level() {
        let out = LogOutput::new(PinId(33), "red");
        let other = out.clone();
        other.set_level(true);
        assert!(out.is_high());
        assert_eq!(out.pin(), PinId(33));
    }
}
