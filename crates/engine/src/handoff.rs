// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary hand-off between a producer role and a consumer role

use crate::events::log_events;
use crate::wait::{deadline_after, wait_for};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tk_core::{Permit, PermitInput, SyncEvent};
use tokio::sync::Notify;
use tokio::time::Instant;

/// A wait that saw no permit before its timeout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaitError {
    #[error("no permit on {handoff} within {waited:?}")]
    TimedOut { handoff: String, waited: Duration },
}

struct HandoffInner {
    permit: Mutex<Permit>,
    posted: Notify,
}

/// Single-slot, saturating permit shared by handle.
///
/// `post` never blocks. `wait` consumes exactly one permit; posts made while
/// a permit is pending collapse into it.
#[derive(Clone)]
pub struct BinaryHandoff {
    inner: Arc<HandoffInner>,
}

impl BinaryHandoff {
    /// Create an empty hand-off
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(HandoffInner {
                permit: Mutex::new(Permit::new(name)),
                posted: Notify::new(),
            }),
        }
    }

    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    pub fn is_posted(&self) -> bool {
        self.lock().is_posted()
    }

    /// Set the permit and wake any waiting consumer
    pub fn post(&self) {
        self.apply(PermitInput::Post);
        self.inner.posted.notify_waiters();
    }

    /// Wait up to `timeout` for a permit and consume it
    pub async fn wait(&self, timeout: Duration) -> Result<(), WaitError> {
        let start = Instant::now();
        let taken = wait_for(&self.inner.posted, deadline_after(timeout), || {
            let events = self.apply(PermitInput::Take);
            events
                .iter()
                .any(|e| matches!(e, SyncEvent::PermitTaken { .. }))
                .then_some(())
        })
        .await;

        taken.ok_or_else(|| WaitError::TimedOut {
            handoff: self.name(),
            waited: start.elapsed(),
        })
    }

    fn apply(&self, input: PermitInput) -> Vec<SyncEvent> {
        let mut permit = self.lock();
        let (next, events) = permit.transition(input);
        *permit = next;
        drop(permit);

        log_events(&events);
        events
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Permit> {
        self.inner.permit.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for BinaryHandoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let permit = self.lock();
        f.debug_struct("BinaryHandoff")
            .field("name", &permit.name)
            .field("state", &permit.state)
            .finish()
    }
}

#[cfg(test)]
#[path = "handoff_tests.rs"]
mod tests;
