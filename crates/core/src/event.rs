// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events emitted by the coordination state machines

use crate::channel::Message;
use crate::role::RoleId;
use std::time::Duration;

/// Something observable that happened inside a primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    // Permit events
    PermitPosted { name: String },
    /// Post while a permit was already pending; collapses into the pending one
    PermitOverwritten { name: String },
    PermitTaken { name: String },
    PermitUnavailable { name: String },

    // Gate events
    GateAcquired { name: String, owner: RoleId },
    GateDenied {
        name: String,
        requester: RoleId,
        owner: RoleId,
    },
    GateReleased {
        name: String,
        owner: RoleId,
        held_for: Duration,
    },

    // Channel events
    MessageSent {
        name: String,
        message: Message,
        len: usize,
    },
    SendRejected {
        name: String,
        message: Message,
        capacity: usize,
    },
    MessageReceived {
        name: String,
        message: Message,
        len: usize,
    },
    ReceiveEmpty { name: String },
}

impl SyncEvent {
    /// Event name for logging (e.g. "gate:acquired")
    pub fn name(&self) -> &'static str {
        match self {
            SyncEvent::PermitPosted { .. } => "permit:posted",
            SyncEvent::PermitOverwritten { .. } => "permit:overwritten",
            SyncEvent::PermitTaken { .. } => "permit:taken",
            SyncEvent::PermitUnavailable { .. } => "permit:unavailable",

            SyncEvent::GateAcquired { .. } => "gate:acquired",
            SyncEvent::GateDenied { .. } => "gate:denied",
            SyncEvent::GateReleased { .. } => "gate:released",

            SyncEvent::MessageSent { .. } => "channel:sent",
            SyncEvent::SendRejected { .. } => "channel:full",
            SyncEvent::MessageReceived { .. } => "channel:received",
            SyncEvent::ReceiveEmpty { .. } => "channel:empty",
        }
    }

    /// Name of the primitive that emitted the event
    pub fn primitive(&self) -> &str {
        match self {
            SyncEvent::PermitPosted { name }
            | SyncEvent::PermitOverwritten { name }
            | SyncEvent::PermitTaken { name }
            | SyncEvent::PermitUnavailable { name }
            | SyncEvent::GateAcquired { name, .. }
            | SyncEvent::GateDenied { name, .. }
            | SyncEvent::GateReleased { name, .. }
            | SyncEvent::MessageSent { name, .. }
            | SyncEvent::SendRejected { name, .. }
            | SyncEvent::MessageReceived { name, .. }
            | SyncEvent::ReceiveEmpty { name } => name,
        }
    }

    /// The message handed out by a successful receive, if this is one
    pub fn received(&self) -> Option<Message> {
        match self {
            SyncEvent::MessageReceived { message, .. } => Some(*message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_namespaced_by_primitive_kind() {
        let event = SyncEvent::GateDenied {
            name: "led".to_string(),
            requester: RoleId::new("task-g"),
            owner: RoleId::new("task-r"),
        };
        assert_eq!(event.name(), "gate:denied");
        assert_eq!(event.primitive(), "led");
    }

    #[test]
    fn received_only_matches_successful_receive() {
        let received = SyncEvent::MessageReceived {
            name: "q".to_string(),
            message: Message(3),
            len: 0,
        };
        let empty = SyncEvent::ReceiveEmpty {
            name: "q".to_string(),
        };
        assert_eq!(received.received(), Some(Message(3)));
        assert_eq!(empty.received(), None);
    }
}
