// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tk-core: Core library for the taskkit (tk) demos
//!
//! This crate provides:
//! - Pure state machines for the coordination primitives (permit, gate, channel buffer)
//! - Events emitted by those state machines
//! - Demo configuration
//! - Signal arithmetic for the PWM, ADC and counter demos

pub mod clock;
pub mod role;

// State machines (order matters for dependencies)
pub mod event;
pub mod permit;
pub mod gate;
pub mod channel;

pub mod config;
pub mod signal;

// Re-exports
pub use channel::{ChannelBuffer, ChannelError, ChannelInput, Message};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, Demo, DemoConfig};
pub use event::SyncEvent;
pub use gate::{Gate, GateError, GateInput, GateState};
pub use permit::{Permit, PermitInput, PermitState};
pub use role::RoleId;
