// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic jobs for the peripheral demos

mod blink;
mod level;
mod ramp;

pub use blink::{CounterBlinkJob, ToggleJob};
pub use level::AdcLevelJob;
pub use ramp::DutyRampJob;

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
