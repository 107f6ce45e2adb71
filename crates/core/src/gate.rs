// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gate state machine for exclusive access to a shared actuator
//!
//! The gate has no waiter queue. Whoever asks while it is free gets it.

use crate::clock::Clock;
use crate::event::SyncEvent;
use crate::role::RoleId;
use std::time::Instant;
use thiserror::Error;

/// Gate state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Nobody holds the gate
    Free,
    /// Gate is held by `owner` since `since`
    Held { owner: RoleId, since: Instant },
}

/// Errors from gate transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("role {caller} released gate {gate} held by {owner}")]
    NotOwner {
        gate: String,
        caller: RoleId,
        owner: RoleId,
    },
    #[error("role {caller} released gate {gate} which is not held")]
    NotHeld { gate: String, caller: RoleId },
}

/// Mutual-exclusion gate
#[derive(Clone, Debug)]
pub struct Gate {
    pub name: String,
    pub state: GateState,
}

/// Events that can trigger gate transitions
#[derive(Clone, Debug)]
pub enum GateInput {
    /// Attempt to become owner
    Acquire { role: RoleId },
    /// Give the gate back; only the owner may do this
    Release { role: RoleId },
}

impl Gate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: GateState::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self.state, GateState::Free)
    }

    pub fn is_held_by(&self, role: &RoleId) -> bool {
        matches!(&self.state, GateState::Held { owner, .. } if owner == role)
    }

    pub fn owner(&self) -> Option<&RoleId> {
        match &self.state {
            GateState::Free => None,
            GateState::Held { owner, .. } => Some(owner),
        }
    }

    /// Pure state transition function
    ///
    /// A denied acquire is a normal outcome and is reported as an event.
    /// Releasing a gate the caller does not own is a contract violation.
    pub fn transition(
        &self,
        input: GateInput,
        clock: &impl Clock,
    ) -> Result<(Gate, Vec<SyncEvent>), GateError> {
        let mut new_gate = self.clone();
        let mut events = Vec::new();

        match input {
            GateInput::Acquire { role } => match &self.state {
                GateState::Free => {
                    new_gate.state = GateState::Held {
                        owner: role.clone(),
                        since: clock.now(),
                    };
                    events.push(SyncEvent::GateAcquired {
                        name: self.name.clone(),
                        owner: role,
                    });
                }
                GateState::Held { owner, .. } => {
                    events.push(SyncEvent::GateDenied {
                        name: self.name.clone(),
                        requester: role,
                        owner: owner.clone(),
                    });
                }
            },

            GateInput::Release { role } => match &self.state {
                GateState::Held { owner, since } if *owner == role => {
                    new_gate.state = GateState::Free;
                    events.push(SyncEvent::GateReleased {
                        name: self.name.clone(),
                        owner: role,
                        held_for: clock.elapsed_since(*since),
                    });
                }
                GateState::Held { owner, .. } => {
                    return Err(GateError::NotOwner {
                        gate: self.name.clone(),
                        caller: role,
                        owner: owner.clone(),
                    });
                }
                GateState::Free => {
                    return Err(GateError::NotHeld {
                        gate: self.name.clone(),
                        caller: role,
                    });
                }
            },
        }

        Ok((new_gate, events))
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
