// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn defaults_match_firmware_constants() {
    let config = DemoConfig::default();
    assert_eq!(config.pins.gpio(Led::Red), 33);
    assert_eq!(config.pins.gpio(Led::Green), 25);
    assert_eq!(config.pins.gpio(Led::Blue), 26);
    assert_eq!(config.pins.gpio(Led::Status), 2);
    assert_eq!(config.indicator.cycles, 8);
    assert_eq!(config.queue.capacity, 20);
    assert_eq!(config.queue.sequence_len, 8);
    assert_eq!(config.mutex.acquire_timeout, Duration::from_millis(100));
    assert_eq!(config.handoff.producer_backoff, Duration::from_secs(10));
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_is_default() {
    let config = DemoConfig::from_toml_str("").unwrap();
    assert_eq!(config, DemoConfig::default());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = DemoConfig::from_toml_str(
        r#"
[queue]
capacity = 2
send_timeout = "50ms"
"#,
    )
    .unwrap();

    assert_eq!(config.queue.capacity, 2);
    assert_eq!(config.queue.send_timeout, Duration::from_millis(50));
    assert_eq!(config.queue.receive_timeout, Duration::from_millis(100));
    assert_eq!(config.pins, PinConfig::default());
}

#[test]
fn contenders_can_be_replaced() {
    let config = DemoConfig::from_toml_str(
        r#"
[[mutex.contenders]]
role = "fast"
led = "blue"
backoff = "250ms"
"#,
    )
    .unwrap();

    assert_eq!(config.mutex.contenders.len(), 1);
    assert_eq!(config.mutex.contenders[0].led, Led::Blue);
    assert_eq!(config.mutex.contenders[0].backoff, Duration::from_millis(250));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = DemoConfig::from_toml_str("[queue]\ncapacty = 3\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_capacity_is_invalid() {
    let err = DemoConfig::from_toml_str("[queue]\ncapacity = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("queue.capacity")));
}

#[test]
fn duty_above_max_is_invalid() {
    let err = DemoConfig::from_toml_str("[pwm]\nblue = 2000\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("pwm.blue")));
}

#[test]
fn zero_interval_is_invalid() {
    let err = DemoConfig::from_toml_str("[adc]\ninterval = \"0s\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("adc.interval")));
}

#[test]
fn empty_contenders_are_invalid() {
    let err = DemoConfig::from_toml_str("[mutex]\ncontenders = []\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn load_without_path_is_default() {
    assert_eq!(DemoConfig::load(None).unwrap(), DemoConfig::default());
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[blink]\nwrap_after = 5").unwrap();

    let config = DemoConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.blink.wrap_after, 5);
}

#[test]
fn load_missing_file_reports_path() {
    let err = DemoConfig::load(Some(Path::new("/nonexistent/tk.toml"))).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/tk.toml"));
}

#[test]
fn demo_names_round_trip_through_from_str() {
    for demo in Demo::ALL {
        assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
    }
}

#[test]
fn unknown_demo_is_an_error() {
    let err = "semaphore".parse::<Demo>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDemo(name) if name == "semaphore"));
}

#[test]
fn config_serializes_durations_as_humantime() {
    let json = serde_json::to_value(DemoConfig::default()).unwrap();
    assert_eq!(json["queue"]["producer_cooldown"], "7s");
    assert_eq!(json["mutex"]["contenders"][1]["backoff"], "2s");
}
