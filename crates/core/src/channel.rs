// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded FIFO buffer state machine
//!
//! Holds at most `capacity` integer messages. A send into a full buffer and
//! a receive from an empty one leave the contents untouched.

use crate::event::SyncEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Integer payload carried through a channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message(pub u32);

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors creating a channel buffer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel {0} must have a capacity of at least 1")]
    ZeroCapacity(String),
}

/// Fixed-capacity FIFO
#[derive(Clone, Debug)]
pub struct ChannelBuffer {
    pub name: String,
    capacity: usize,
    items: VecDeque<Message>,
}

/// Events that trigger buffer transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelInput {
    /// Append to the tail if there is room
    Send { message: Message },
    /// Remove the head if there is one
    Receive,
}

impl ChannelBuffer {
    pub fn new(name: impl Into<String>, capacity: usize) -> Result<Self, ChannelError> {
        let name = name.into();
        if capacity == 0 {
            return Err(ChannelError::ZeroCapacity(name));
        }
        Ok(Self {
            name,
            capacity,
            items: VecDeque::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Messages in delivery order
    pub fn messages(&self) -> Vec<Message> {
        self.items.iter().copied().collect()
    }

    /// Pure state transition function
    pub fn transition(&self, input: ChannelInput) -> (ChannelBuffer, Vec<SyncEvent>) {
        let mut new_buf = self.clone();
        let name = self.name.clone();

        let event = match input {
            ChannelInput::Send { message } => {
                if self.is_full() {
                    SyncEvent::SendRejected {
                        name,
                        message,
                        capacity: self.capacity,
                    }
                } else {
                    new_buf.items.push_back(message);
                    SyncEvent::MessageSent {
                        name,
                        message,
                        len: new_buf.len(),
                    }
                }
            }
            ChannelInput::Receive => match new_buf.items.pop_front() {
                Some(message) => SyncEvent::MessageReceived {
                    name,
                    message,
                    len: new_buf.len(),
                },
                None => SyncEvent::ReceiveEmpty { name },
            },
        };

        (new_buf, vec![event])
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
