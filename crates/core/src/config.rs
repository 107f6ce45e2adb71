// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo configuration
//!
//! Every field defaults to the constant the firmware examples were built
//! with, so an empty file (or no file) reproduces them exactly.

use crate::signal::MAX_DUTY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("unknown demo: {0}")]
    UnknownDemo(String),
}

/// The runnable examples
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Blink,
    TimerBlink,
    Tasks,
    Pwm,
    Adc,
    Handoff,
    Mutex,
    Queue,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Blink,
        Demo::TimerBlink,
        Demo::Tasks,
        Demo::Pwm,
        Demo::Adc,
        Demo::Handoff,
        Demo::Mutex,
        Demo::Queue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Blink => "blink",
            Demo::TimerBlink => "timer-blink",
            Demo::Tasks => "tasks",
            Demo::Pwm => "pwm",
            Demo::Adc => "adc",
            Demo::Handoff => "handoff",
            Demo::Mutex => "mutex",
            Demo::Queue => "queue",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Demo::Blink => "Toggle the status LED every second and log a wrapping counter",
            Demo::TimerBlink => "Toggle the status LED from a periodic timer",
            Demo::Tasks => "Blink red, green and blue from three independent tasks",
            Demo::Pwm => "Ramp three PWM duties from a 50ms timer",
            Demo::Adc => "Light LEDs according to the potentiometer band",
            Demo::Handoff => "Task R hands a binary permit to task G",
            Demo::Mutex => "Two tasks contend for the indicator LEDs through a gate",
            Demo::Queue => "Task R sends 0..7 through a bounded queue to task G",
        }
    }
}

impl std::fmt::Display for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ConfigError::UnknownDemo(s.to_string()))
    }
}

/// LEDs wired to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Led {
    Red,
    Green,
    Blue,
    Status,
}

impl Led {
    pub fn label(&self) -> &'static str {
        match self {
            Led::Red => "red",
            Led::Green => "green",
            Led::Blue => "blue",
            Led::Status => "status",
        }
    }
}

impl std::fmt::Display for Led {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// GPIO numbers per LED
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinConfig {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub status: u8,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            red: 33,
            green: 25,
            blue: 26,
            status: 2,
        }
    }
}

impl PinConfig {
    pub fn gpio(&self, led: Led) -> u8 {
        match led {
            Led::Red => self.red,
            Led::Green => self.green,
            Led::Blue => self.blue,
            Led::Status => self.status,
        }
    }
}

/// The on/off pattern roles use to show they are working
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    pub cycles: u32,
    #[serde(with = "humantime_serde")]
    pub half_period: Duration,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            cycles: 8,
            half_period: Duration::from_millis(500),
        }
    }
}

/// Binary hand-off timing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandoffConfig {
    /// Producer sleep between posts
    #[serde(with = "humantime_serde")]
    pub producer_backoff: Duration,
    /// How long the consumer waits for a permit per attempt
    #[serde(with = "humantime_serde")]
    pub consumer_timeout: Duration,
    /// Mandatory consumer sleep after every attempt
    #[serde(with = "humantime_serde")]
    pub consumer_yield: Duration,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            producer_backoff: Duration::from_secs(10),
            consumer_timeout: Duration::from_secs(12 * 60 * 60),
            consumer_yield: Duration::from_millis(100),
        }
    }
}

/// One role contending for the gate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContenderConfig {
    pub role: String,
    pub led: Led,
    #[serde(with = "humantime_serde")]
    pub backoff: Duration,
}

/// Gate contention timing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MutexConfig {
    #[serde(with = "humantime_serde")]
    pub acquire_timeout: Duration,
    pub contenders: Vec<ContenderConfig>,
}

impl Default for MutexConfig {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_millis(100),
            contenders: vec![
                ContenderConfig {
                    role: "task-r".to_string(),
                    led: Led::Red,
                    backoff: Duration::from_millis(1000),
                },
                ContenderConfig {
                    role: "task-g".to_string(),
                    led: Led::Green,
                    backoff: Duration::from_millis(2000),
                },
            ],
        }
    }
}

/// Bounded queue sizing and timing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    pub capacity: usize,
    /// Values 0..sequence_len are sent per round
    pub sequence_len: u32,
    #[serde(with = "humantime_serde")]
    pub send_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub receive_timeout: Duration,
    /// Producer LED pulse per sent value (half off, half on)
    #[serde(with = "humantime_serde")]
    pub producer_pulse: Duration,
    /// Producer sleep after a full round
    #[serde(with = "humantime_serde")]
    pub producer_cooldown: Duration,
    /// Consumer LED pulse per received value
    #[serde(with = "humantime_serde")]
    pub consumer_pulse: Duration,
    /// Consumer sleep after every attempt
    #[serde(with = "humantime_serde")]
    pub consumer_delay: Duration,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            sequence_len: 8,
            send_timeout: Duration::from_millis(100),
            receive_timeout: Duration::from_millis(100),
            producer_pulse: Duration::from_millis(400),
            producer_cooldown: Duration::from_millis(7000),
            consumer_pulse: Duration::from_millis(2000),
            consumer_delay: Duration::from_millis(1000),
        }
    }
}

/// One free-running blinker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlinkerConfig {
    pub led: Led,
    #[serde(with = "humantime_serde")]
    pub half_period: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TasksConfig {
    pub blinkers: Vec<BlinkerConfig>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        let blinker = |led, ms| BlinkerConfig {
            led,
            half_period: Duration::from_millis(ms),
        };
        Self {
            blinkers: vec![
                blinker(Led::Red, 1000),
                blinker(Led::Green, 2000),
                blinker(Led::Blue, 4000),
            ],
        }
    }
}

/// PWM ramp
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PwmConfig {
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub step: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(50),
            step: 10,
            red: 0,
            green: 300,
            blue: 600,
        }
    }
}

/// Potentiometer sampling
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdcConfig {
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub channel: u8,
    pub band_width: u16,
    /// Change per sample of the simulated potentiometer
    pub sweep_step: u16,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(50),
            channel: 4,
            band_width: 1000,
            sweep_step: 25,
        }
    }
}

/// Status LED blink demos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlinkConfig {
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub wrap_after: u32,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            wrap_after: 30,
        }
    }
}

/// Complete configuration for all demos
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub pins: PinConfig,
    pub indicator: IndicatorConfig,
    pub handoff: HandoffConfig,
    pub mutex: MutexConfig,
    pub queue: QueueConfig,
    pub tasks: TasksConfig,
    pub pwm: PwmConfig,
    pub adc: AdcConfig,
    pub blink: BlinkConfig,
}

impl DemoConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject settings no demo can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.queue.capacity == 0 {
            return invalid("queue.capacity must be at least 1".to_string());
        }
        if self.mutex.contenders.is_empty() {
            return invalid("mutex.contenders must not be empty".to_string());
        }
        if self.tasks.blinkers.is_empty() {
            return invalid("tasks.blinkers must not be empty".to_string());
        }
        if self.adc.band_width == 0 {
            return invalid("adc.band_width must be at least 1".to_string());
        }

        let periods = [
            ("indicator.half_period", self.indicator.half_period),
            ("pwm.interval", self.pwm.interval),
            ("adc.interval", self.adc.interval),
            ("blink.interval", self.blink.interval),
        ];
        for (field, period) in periods {
            if period.is_zero() {
                return invalid(format!("{} must be greater than zero", field));
            }
        }
        for blinker in &self.tasks.blinkers {
            if blinker.half_period.is_zero() {
                return invalid(format!("tasks blinker {} has a zero half_period", blinker.led));
            }
        }

        for (field, duty) in [
            ("pwm.step", self.pwm.step),
            ("pwm.red", self.pwm.red),
            ("pwm.green", self.pwm.green),
            ("pwm.blue", self.pwm.blue),
        ] {
            if duty > MAX_DUTY {
                return invalid(format!("{} must be at most {}", field, MAX_DUTY));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
