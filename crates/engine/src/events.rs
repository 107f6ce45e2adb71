// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging of primitive transitions

use tk_core::SyncEvent;

/// Emit each event at debug level, named like `gate:acquired`
pub(crate) fn log_events(events: &[SyncEvent]) {
    for event in events {
        tracing::debug!(primitive = event.primitive(), details = ?event, "{}", event.name());
    }
}
