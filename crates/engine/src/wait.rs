// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline-bounded waiting on a `Notify`

use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

/// Far enough out that nothing in a demo will reach it
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Deadline `timeout` from now, clamped instead of overflowing
pub(crate) fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Retry `attempt` until it yields a value or `deadline` passes.
///
/// Interest in `notify` is registered before each attempt, so a
/// `notify_waiters` racing with the attempt is never missed. All woken
/// waiters retry; there is no hand-over to a particular one.
pub(crate) async fn wait_for<T>(
    notify: &Notify,
    deadline: Instant,
    mut attempt: impl FnMut() -> Option<T>,
) -> Option<T> {
    loop {
        let notified = notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        if let Some(value) = attempt() {
            return Some(value);
        }
        if tokio::time::timeout_at(deadline, notified).await.is_err() {
            return None;
        }
    }
}
