// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builds a demo's primitives and roles and runs them as tasks

use crate::actuator::{Actuator, ActuatorBank};
use crate::channel::BoundedChannel;
use crate::error::EngineError;
use crate::gate::SharedGate;
use crate::handoff::BinaryHandoff;
use crate::jobs::{AdcLevelJob, CounterBlinkJob, DutyRampJob, ToggleJob};
use crate::periodic::{run_periodic, PeriodicJob};
use crate::role::{run_forever, Role};
use crate::roles::{
    Blinker, ChannelConsumer, ChannelProducer, Contender, HandoffConsumer, HandoffProducer,
    Indicator, QueueTiming,
};
use std::time::Duration;
use tk_adapters::{Board, PinId};
use tk_core::config::Led;
use tk_core::signal::DutyRamp;
use tk_core::{Demo, DemoConfig, RoleId};
use tokio::task::JoinSet;

/// Creates everything a demo needs from a board and a configuration
pub struct Orchestrator<B> {
    board: B,
    config: DemoConfig,
}

/// Tasks of a started demo
pub struct RunningDemo {
    demo: Demo,
    tasks: JoinSet<()>,
    names: Vec<String>,
}

/// Tasks collected before anything is spawned, so a construction failure
/// leaves nothing running
#[derive(Default)]
struct Plan {
    units: Vec<(String, Unit)>,
}

type Unit = std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>>;

impl Plan {
    fn role<R: Role>(&mut self, role: R) {
        self.units.push((role.id().to_string(), Box::pin(run_forever(role))));
    }

    fn job<J: PeriodicJob>(&mut self, job: J, period: Duration) {
        self.units
            .push((job.name().to_string(), Box::pin(run_periodic(job, period))));
    }
}

impl<B: Board> Orchestrator<B> {
    pub fn new(board: B, config: DemoConfig) -> Self {
        Self { board, config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Validate, build the demo's primitives, then spawn its roles on the
    /// current runtime
    pub fn start(&self, demo: Demo) -> Result<RunningDemo, EngineError> {
        self.config.validate()?;
        let plan = self.plan(demo)?;

        let mut tasks = JoinSet::new();
        let mut names = Vec::with_capacity(plan.units.len());
        for (name, unit) in plan.units {
            tasks.spawn(unit);
            names.push(name);
        }

        tracing::info!(%demo, tasks = ?names, "demo started");
        Ok(RunningDemo { demo, tasks, names })
    }

    fn plan(&self, demo: Demo) -> Result<Plan, EngineError> {
        let config = &self.config;
        let indicator = Indicator::from(&config.indicator);
        let mut plan = Plan::default();

        match demo {
            Demo::Blink => {
                let status = self.actuator(Led::Status);
                let job = CounterBlinkJob::new(status, config.blink.wrap_after);
                plan.job(job, config.blink.interval);
            }

            Demo::TimerBlink => {
                plan.job(ToggleJob::new(self.actuator(Led::Status)), config.blink.interval);
            }

            Demo::Tasks => {
                for blinker in &config.tasks.blinkers {
                    plan.role(Blinker {
                        id: RoleId::new(format!("task-{}", blinker.led)),
                        actuator: self.actuator(blinker.led),
                        half_period: blinker.half_period,
                    });
                }
            }

            Demo::Pwm => {
                let pwm = &config.pwm;
                let starts = [(Led::Red, pwm.red), (Led::Green, pwm.green), (Led::Blue, pwm.blue)];
                let channels = starts
                    .into_iter()
                    .enumerate()
                    .map(|(channel, (led, initial))| {
                        let pin = PinId(config.pins.gpio(led));
                        (
                            self.board.pwm(channel as u8, pin),
                            DutyRamp::new(initial, pwm.step),
                        )
                    })
                    .collect();
                plan.job(DutyRampJob::new(channels), pwm.interval);
            }

            Demo::Adc => {
                let leds = [Led::Red, Led::Green, Led::Blue].map(|led| self.actuator(led));
                let job = AdcLevelJob::new(
                    self.board.adc(config.adc.channel),
                    leds,
                    config.adc.band_width,
                );
                plan.job(job, config.adc.interval);
            }

            Demo::Handoff => {
                let handoff = BinaryHandoff::new("key");
                plan.role(HandoffProducer {
                    id: RoleId::new("task-r"),
                    actuator: self.actuator(Led::Red),
                    handoff: handoff.clone(),
                    indicator,
                    backoff: config.handoff.producer_backoff,
                });
                plan.role(HandoffConsumer {
                    id: RoleId::new("task-g"),
                    actuator: self.actuator(Led::Green),
                    handoff,
                    indicator,
                    timeout: config.handoff.consumer_timeout,
                    yield_for: config.handoff.consumer_yield,
                });
            }

            Demo::Mutex => {
                let mut leds: Vec<Led> = Vec::new();
                for contender in &config.mutex.contenders {
                    if !leds.contains(&contender.led) {
                        leds.push(contender.led);
                    }
                }
                let bank = ActuatorBank::new(
                    leds.into_iter()
                        .map(|led| (led, self.actuator(led)))
                        .collect(),
                );
                let gate = SharedGate::new("leds", bank);

                for contender in &config.mutex.contenders {
                    plan.role(Contender {
                        id: RoleId::new(contender.role.as_str()),
                        gate: gate.clone(),
                        led: contender.led,
                        indicator,
                        acquire_timeout: config.mutex.acquire_timeout,
                        backoff: contender.backoff,
                    });
                }
            }

            Demo::Queue => {
                let channel = BoundedChannel::new("queue", config.queue.capacity)?;
                let timing = QueueTiming::from(&config.queue);
                plan.role(ChannelProducer {
                    id: RoleId::new("task-r"),
                    actuator: self.actuator(Led::Red),
                    channel: channel.clone(),
                    timing,
                });
                plan.role(ChannelConsumer {
                    id: RoleId::new("task-g"),
                    actuator: self.actuator(Led::Green),
                    channel,
                    timing,
                });
            }
        }

        Ok(plan)
    }

    fn actuator(&self, led: Led) -> Actuator<B::Output> {
        let pin = PinId(self.config.pins.gpio(led));
        Actuator::new(self.board.output(pin, led.label()), led.label())
    }
}

impl RunningDemo {
    pub fn demo(&self) -> Demo {
        self.demo
    }

    /// Names of the spawned roles and jobs, in spawn order
    pub fn task_names(&self) -> &[String] {
        &self.names
    }

    /// Resolves only if a task ends on its own, which never happens in a
    /// healthy demo
    pub async fn failure(&mut self) -> EngineError {
        match self.tasks.join_next().await {
            Some(Ok(())) => EngineError::TaskExited(self.demo),
            Some(Err(e)) => EngineError::TaskFailed(e.to_string()),
            None => std::future::pending().await,
        }
    }

    /// Abort every task and wait for them to finish. Returns how many ran.
    pub async fn shutdown(mut self) -> usize {
        let count = self.names.len();
        self.tasks.abort_all();
        while self.tasks.join_next().await.is_some() {}
        tracing::info!(demo = %self.demo, tasks = count, "demo stopped");
        count
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
