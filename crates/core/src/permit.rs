// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permit state machine for one-shot hand-off between two roles
//!
//! A permit is a single saturating slot: posting while a permit is already
//! pending does not queue a second one.

use crate::event::SyncEvent;

/// Permit state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PermitState {
    /// Nothing to collect
    #[default]
    Empty,
    /// A post is waiting to be consumed
    Posted,
}

/// Binary hand-off permit
#[derive(Clone, Debug)]
pub struct Permit {
    pub name: String,
    pub state: PermitState,
}

/// Events that trigger permit transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermitInput {
    /// Set the permit, regardless of its current state
    Post,
    /// Consume the permit if one is pending
    Take,
}

impl Permit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: PermitState::Empty,
        }
    }

    pub fn is_posted(&self) -> bool {
        self.state == PermitState::Posted
    }

    /// Pure state transition function
    pub fn transition(&self, input: PermitInput) -> (Permit, Vec<SyncEvent>) {
        let mut new_permit = self.clone();
        let name = self.name.clone();

        let event = match (input, self.state) {
            (PermitInput::Post, PermitState::Empty) => {
                new_permit.state = PermitState::Posted;
                SyncEvent::PermitPosted { name }
            }
            (PermitInput::Post, PermitState::Posted) => SyncEvent::PermitOverwritten { name },
            (PermitInput::Take, PermitState::Posted) => {
                new_permit.state = PermitState::Empty;
                SyncEvent::PermitTaken { name }
            }
            (PermitInput::Take, PermitState::Empty) => SyncEvent::PermitUnavailable { name },
        };

        (new_permit, vec![event])
    }
}

#[cfg(test)]
#[path = "permit_tests.rs"]
mod tests;
