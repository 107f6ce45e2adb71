// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutual-exclusion gate around a shared resource
//!
//! Acquisition is a bounded-time attempt. There is no queue: when the gate
//! is released every waiting role retries and whichever runs first wins.

use crate::events::log_events;
use crate::wait::{deadline_after, wait_for};
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tk_core::{Clock, Gate, GateInput, GateState, RoleId, SyncEvent, SystemClock};
use tokio::sync::Notify;
use tokio::time::Instant;

/// An acquisition attempt that did not get the gate in time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AcquireError {
    #[error("role {role} could not take gate {gate} within {waited:?}")]
    TimedOut {
        gate: String,
        role: RoleId,
        waited: Duration,
    },
}

struct GateInner<T, C> {
    gate: Mutex<Gate>,
    released: Notify,
    resource: T,
    clock: C,
}

/// Gate that owns the resource it protects; the only way to reach the
/// resource is through a [`GateGuard`].
pub struct SharedGate<T, C: Clock = SystemClock> {
    inner: Arc<GateInner<T, C>>,
}

impl<T, C: Clock> Clone for SharedGate<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedGate<T, SystemClock> {
    pub fn new(name: impl Into<String>, resource: T) -> Self {
        Self::with_clock(name, resource, SystemClock)
    }
}

impl<T, C: Clock> SharedGate<T, C> {
    pub fn with_clock(name: impl Into<String>, resource: T, clock: C) -> Self {
        Self {
            inner: Arc::new(GateInner {
                gate: Mutex::new(Gate::new(name)),
                released: Notify::new(),
                resource,
                clock,
            }),
        }
    }

    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    /// Current holder, if any
    pub fn owner(&self) -> Option<RoleId> {
        self.lock().owner().cloned()
    }

    /// Try for up to `timeout` to become the holder
    pub async fn try_acquire(
        &self,
        role: &RoleId,
        timeout: Duration,
    ) -> Result<GateGuard<'_, T, C>, AcquireError> {
        let start = Instant::now();
        let acquired = wait_for(&self.inner.released, deadline_after(timeout), || {
            self.try_take(role).then_some(())
        })
        .await;

        match acquired {
            Some(()) => Ok(GateGuard {
                gate: self,
                role: role.clone(),
            }),
            None => Err(AcquireError::TimedOut {
                gate: self.name(),
                role: role.clone(),
                waited: start.elapsed(),
            }),
        }
    }

    fn try_take(&self, role: &RoleId) -> bool {
        let mut gate = self.lock();
        let result = gate.transition(GateInput::Acquire { role: role.clone() }, &self.inner.clock);
        let events = match result {
            Ok((next, events)) => {
                *gate = next;
                events
            }
            Err(e) => {
                tracing::error!(error = %e, "gate acquire rejected");
                return false;
            }
        };
        drop(gate);

        log_events(&events);
        events
            .iter()
            .any(|e| matches!(e, SyncEvent::GateAcquired { .. }))
    }

    fn release_as(&self, role: &RoleId) {
        let mut gate = self.lock();
        let result = gate.transition(GateInput::Release { role: role.clone() }, &self.inner.clock);
        match result {
            Ok((next, events)) => {
                *gate = next;
                drop(gate);
                log_events(&events);
                self.inner.released.notify_waiters();
            }
            Err(e) => tracing::error!(error = %e, "gate release rejected"),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Gate> {
        self.inner.gate.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Proof of holding a [`SharedGate`]. Releases the gate when dropped.
pub struct GateGuard<'a, T, C: Clock = SystemClock> {
    gate: &'a SharedGate<T, C>,
    role: RoleId,
}

impl<T, C: Clock> GateGuard<'_, T, C> {
    pub fn holder(&self) -> &RoleId {
        &self.role
    }

    /// How long the gate has been held by this guard's role
    pub fn held_for(&self) -> Duration {
        match &self.gate.lock().state {
            GateState::Held { since, .. } => self.gate.inner.clock.elapsed_since(*since),
            GateState::Free => Duration::ZERO,
        }
    }

    /// Give the gate back
    pub fn release(self) {
        drop(self);
    }
}

impl<T, C: Clock> Deref for GateGuard<'_, T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.gate.inner.resource
    }
}

impl<T, C: Clock> Drop for GateGuard<'_, T, C> {
    fn drop(&mut self) {
        self.gate.release_as(&self.role);
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
