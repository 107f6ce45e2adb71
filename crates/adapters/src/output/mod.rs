// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Digital GPIO outputs

mod console;

pub use console::LogOutput;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeOutput, LevelChange};

/// GPIO number, resolved once when the board hands out an output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub u8);

impl std::fmt::Display for PinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// A pin configured as a push-pull output
pub trait DigitalOutput: Clone + Send + Sync + 'static {
    /// The pin this output drives
    fn pin(&self) -> PinId;

    /// Drive the pin high or low
    fn set_level(&self, high: bool);
}
