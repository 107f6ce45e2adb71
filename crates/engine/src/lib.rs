// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! taskkit engine: async coordination primitives, roles, periodic jobs and
//! the orchestrator that wires them into demos

mod actuator;
mod channel;
mod error;
mod events;
mod gate;
mod handoff;
pub mod jobs;
mod orchestrator;
mod periodic;
mod role;
pub mod roles;
mod wait;

pub use actuator::{Actuator, ActuatorBank};
pub use channel::{BoundedChannel, RecvError, SendError};
pub use error::EngineError;
pub use gate::{AcquireError, GateGuard, SharedGate};
pub use handoff::{BinaryHandoff, WaitError};
pub use orchestrator::{Orchestrator, RunningDemo};
pub use periodic::{run_periodic, PeriodicJob};
pub use role::{run_forever, CycleReport, Role};
