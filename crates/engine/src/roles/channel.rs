// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded channel roles

use crate::actuator::Actuator;
use crate::channel::BoundedChannel;
use crate::role::{CycleReport, Role};
use async_trait::async_trait;
use std::time::Duration;
use tk_adapters::DigitalOutput;
use tk_core::config::QueueConfig;
use tk_core::{Message, RoleId};

/// Timing shared by both queue roles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueTiming {
    pub sequence_len: u32,
    pub send_timeout: Duration,
    pub receive_timeout: Duration,
    pub producer_pulse: Duration,
    pub producer_cooldown: Duration,
    pub consumer_pulse: Duration,
    pub consumer_delay: Duration,
}

impl From<&QueueConfig> for QueueTiming {
    fn from(config: &QueueConfig) -> Self {
        Self {
            sequence_len: config.sequence_len,
            send_timeout: config.send_timeout,
            receive_timeout: config.receive_timeout,
            producer_pulse: config.producer_pulse,
            producer_cooldown: config.producer_cooldown,
            consumer_pulse: config.consumer_pulse,
            consumer_delay: config.consumer_delay,
        }
    }
}

/// Sends 0..sequence_len, pulsing once per accepted value, then cools down
pub struct ChannelProducer<O> {
    pub id: RoleId,
    pub actuator: Actuator<O>,
    pub channel: BoundedChannel,
    pub timing: QueueTiming,
}

#[async_trait]
impl<O: DigitalOutput> Role for ChannelProducer<O> {
    fn id(&self) -> &RoleId {
        &self.id
    }

    async fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        for value in 0..self.timing.sequence_len {
            match self.channel.send(Message(value), self.timing.send_timeout).await {
                Ok(()) => {
                    let id = &self.id;
                    self.actuator
                        .pulse(self.timing.producer_pulse, || {
                            tracing::info!(role = %id, value, "Sending: {} to queue", value)
                        })
                        .await;
                    report.completed += 1;
                }
                Err(e) => {
                    tracing::error!(role = %self.id, value, error = %e, "send failed");
                    report.timed_out += 1;
                }
            }
        }

        tokio::time::sleep(self.timing.producer_cooldown).await;
        report
    }
}

/// Receives one value per cycle, pulsing when it gets one
pub struct ChannelConsumer<O> {
    pub id: RoleId,
    pub actuator: Actuator<O>,
    pub channel: BoundedChannel,
    pub timing: QueueTiming,
}

#[async_trait]
impl<O: DigitalOutput> Role for ChannelConsumer<O> {
    fn id(&self) -> &RoleId {
        &self.id
    }

    async fn run_cycle(&mut self) -> CycleReport {
        let report = match self.channel.receive(self.timing.receive_timeout).await {
            Ok(message) => {
                let id = &self.id;
                self.actuator
                    .pulse(self.timing.consumer_pulse, || {
                        tracing::warn!(
                            role = %id,
                            value = message.0,
                            "Receiving: {} from queue",
                            message
                        )
                    })
                    .await;
                CycleReport::completed()
            }
            Err(e) => {
                tracing::error!(role = %self.id, error = %e, "receive failed");
                CycleReport::timed_out()
            }
        };

        tokio::time::sleep(self.timing.consumer_delay).await;
        report
    }
}
