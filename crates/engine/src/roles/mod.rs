// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Role implementations, one pair per coordination pattern
//!
//! - **handoff** - producer posts a permit, consumer waits for it
//! - **contender** - roles compete for the shared LEDs through a gate
//! - **channel** - producer sends a numbered sequence, consumer drains it
//! - **blinker** - free-running LED with no shared primitive

mod blinker;
mod channel;
mod contender;
mod handoff;

pub use blinker::Blinker;
pub use channel::{ChannelConsumer, ChannelProducer, QueueTiming};
pub use contender::Contender;
pub use handoff::{HandoffConsumer, HandoffProducer};

use std::time::Duration;

/// The blink pattern a role shows while it works
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub cycles: u32,
    pub half_period: Duration,
}

impl From<&tk_core::config::IndicatorConfig> for Indicator {
    fn from(config: &tk_core::config::IndicatorConfig) -> Self {
        Self {
            cycles: config.cycles,
            half_period: config.half_period,
        }
    }
}

#[cfg(test)]
#[path = "roles_tests.rs"]
mod tests;
