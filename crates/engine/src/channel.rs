// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded FIFO channel with timeout-bounded send and receive

use crate::events::log_events;
use crate::wait::{deadline_after, wait_for};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tk_core::{ChannelBuffer, ChannelError, ChannelInput, Message, SyncEvent};
use tokio::sync::Notify;

/// A send that found the channel full for its whole timeout.
/// The message is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("channel {channel} full (capacity {capacity}), dropped {message}")]
    Full {
        channel: String,
        message: Message,
        capacity: usize,
    },
}

/// A receive that found the channel empty for its whole timeout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecvError {
    #[error("channel {channel} empty")]
    Empty { channel: String },
}

struct ChannelInner {
    buffer: Mutex<ChannelBuffer>,
    not_full: Notify,
    not_empty: Notify,
}

/// Fixed-capacity FIFO of integer messages shared by handle
#[derive(Clone)]
pub struct BoundedChannel {
    inner: Arc<ChannelInner>,
}

impl BoundedChannel {
    /// Create an empty channel; a capacity of zero is rejected
    pub fn new(name: impl Into<String>, capacity: usize) -> Result<Self, ChannelError> {
        let buffer = ChannelBuffer::new(name, capacity)?;
        Ok(Self {
            inner: Arc::new(ChannelInner {
                buffer: Mutex::new(buffer),
                not_full: Notify::new(),
                not_empty: Notify::new(),
            }),
        })
    }

    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Buffered messages in delivery order
    pub fn snapshot(&self) -> Vec<Message> {
        self.lock().messages()
    }

    /// Wait up to `timeout` for room, then append `message`
    pub async fn send(&self, message: Message, timeout: Duration) -> Result<(), SendError> {
        let sent = wait_for(&self.inner.not_full, deadline_after(timeout), || {
            self.apply(ChannelInput::Send { message })
                .iter()
                .any(|e| matches!(e, SyncEvent::MessageSent { .. }))
                .then_some(())
        })
        .await;

        match sent {
            Some(()) => {
                self.inner.not_empty.notify_waiters();
                Ok(())
            }
            None => {
                let buffer = self.lock();
                Err(SendError::Full {
                    channel: buffer.name.clone(),
                    message,
                    capacity: buffer.capacity(),
                })
            }
        }
    }

    /// Wait up to `timeout` for a message, then remove and return the head
    pub async fn receive(&self, timeout: Duration) -> Result<Message, RecvError> {
        let received = wait_for(&self.inner.not_empty, deadline_after(timeout), || {
            self.apply(ChannelInput::Receive)
                .iter()
                .find_map(SyncEvent::received)
        })
        .await;

        match received {
            Some(message) => {
                self.inner.not_full.notify_waiters();
                Ok(message)
            }
            None => Err(RecvError::Empty {
                channel: self.name(),
            }),
        }
    }

    fn apply(&self, input: ChannelInput) -> Vec<SyncEvent> {
        let mut buffer = self.lock();
        let (next, events) = buffer.transition(input);
        *buffer = next;
        drop(buffer);

        log_events(&events);
        events
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChannelBuffer> {
        self.inner.buffer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for BoundedChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buffer = self.lock();
        f.debug_struct("BoundedChannel")
            .field("name", &buffer.name)
            .field("capacity", &buffer.capacity())
            .field("messages", &buffer.messages())
            .finish()
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
