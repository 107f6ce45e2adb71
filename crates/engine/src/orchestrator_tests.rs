// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tk_adapters::{FakeBoard, LevelChange};
use tk_core::config::ContenderConfig;
use tokio::time::Instant;

const RED: u8 = 33;
const GREEN: u8 = 25;
const BLUE: u8 = 26;
const STATUS: u8 = 2;

fn orchestrator(config: DemoConfig) -> (Orchestrator<FakeBoard>, FakeBoard) {
    let board = FakeBoard::new();
    (Orchestrator::new(board.clone(), config), board)
}

async fn run_for(
    orchestrator: &Orchestrator<FakeBoard>,
    demo: Demo,
    duration: Duration,
) -> usize {
    let running = orchestrator.start(demo).unwrap();
    tokio::time::sleep(duration).await;
    running.shutdown().await
}

fn rising(board: &FakeBoard, gpio: u8) -> usize {
    board.output_for(gpio).map(|o| o.rising_edges()).unwrap_or(0)
}

// =============================================================================
// Startup
// =============================================================================

#[tokio::test(start_paused = true)]
async fn invalid_config_fails_before_spawning() {
    let mut config = DemoConfig::default();
    config.queue.capacity = 0;
    let (orchestrator, board) = orchestrator(config);

    let err = orchestrator.start(Demo::Queue).err().unwrap();

    assert!(matches!(err, EngineError::Config(_)), "{}", err);
    assert!(board.output_for(RED).is_none());
}

#[tokio::test(start_paused = true)]
async fn reports_spawned_task_names() {
    let (orchestrator, _) = orchestrator(DemoConfig::default());

    let running = orchestrator.start(Demo::Handoff).unwrap();
    assert_eq!(running.demo(), Demo::Handoff);
    assert_eq!(running.task_names(), ["task-r", "task-g"]);
    assert_eq!(running.shutdown().await, 2);

    let running = orchestrator.start(Demo::Pwm).unwrap();
    assert_eq!(running.task_names(), ["duty-ramp"]);
    running.shutdown().await;
}

// =============================================================================
// Core patterns
// =============================================================================

#[tokio::test(start_paused = true)]
async fn handoff_consumer_blinks_after_producer_posts() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    // producer blinks 8s then posts; consumer blinks the next 8s
    run_for(&orchestrator, Demo::Handoff, Duration::from_millis(17_000)).await;

    assert_eq!(rising(&board, RED), 8);
    assert_eq!(rising(&board, GREEN), 8);
}

#[tokio::test(start_paused = true)]
async fn queue_delivers_in_order_at_consumer_pace() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    run_for(&orchestrator, Demo::Queue, Duration::from_millis(9_500)).await;

    // all 8 values sent by 3.2s; receives at 0s, 3s and 6s lit by 7s
    assert_eq!(rising(&board, RED), 8);
    assert_eq!(rising(&board, GREEN), 3);
}

/// Time spans during which an LED's indicator ran, one per acquisition
fn holds(writes: &[LevelChange], cycles: usize) -> Vec<(Instant, Instant)> {
    // skip the initial low written when the actuator was created
    writes[1..]
        .chunks(cycles * 2 + 1)
        .map(|chunk| (chunk[0].at, chunk[chunk.len() - 1].at))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn mutex_contenders_never_hold_together() {
    let mut config = DemoConfig::default();
    config.indicator.cycles = 2;
    config.indicator.half_period = Duration::from_millis(50);
    config.mutex.contenders = vec![
        ContenderConfig {
            role: "task-r".to_string(),
            led: Led::Red,
            backoff: Duration::from_millis(100),
        },
        ContenderConfig {
            role: "task-g".to_string(),
            led: Led::Green,
            backoff: Duration::from_millis(200),
        },
    ];
    let (orchestrator, board) = orchestrator(config);

    run_for(&orchestrator, Demo::Mutex, Duration::from_secs(5)).await;

    let red = holds(&board.output_for(RED).unwrap().writes(), 2);
    let green = holds(&board.output_for(GREEN).unwrap().writes(), 2);
    assert!(!red.is_empty());
    assert!(!green.is_empty());

    for (r_start, r_end) in &red {
        for (g_start, g_end) in &green {
            assert!(
                r_end <= g_start || g_end <= r_start,
                "red held {:?}..{:?} while green held {:?}..{:?}",
                r_start,
                r_end,
                g_start,
                g_end
            );
        }
    }
}

#[tokio::test(start_paused = true)]
async fn mutex_favors_the_shorter_backoff() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    // red backs off 1s, green 2s; no queue evens that out
    run_for(&orchestrator, Demo::Mutex, Duration::from_secs(120)).await;

    let red = rising(&board, RED);
    let green = rising(&board, GREEN);
    assert!(green > 0);
    assert!(red > green, "red lit {} times, green {} times", red, green);
}

// =============================================================================
// Peripheral demos
// =============================================================================

#[tokio::test(start_paused = true)]
async fn pwm_ramps_each_channel_every_interval() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    run_for(&orchestrator, Demo::Pwm, Duration::from_millis(120)).await;

    assert_eq!(board.pwm_for(0).unwrap().duties(), vec![0, 10, 20]);
    assert_eq!(board.pwm_for(1).unwrap().duties(), vec![300, 310, 320]);
    assert_eq!(board.pwm_for(2).unwrap().duties(), vec![600, 610, 620]);
}

#[tokio::test(start_paused = true)]
async fn adc_drives_leds_from_latest_band() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());
    board.push_adc_samples(4, [1500, 2500]);

    run_for(&orchestrator, Demo::Adc, Duration::from_millis(120)).await;

    let lit = |gpio| board.output_for(gpio).unwrap().is_high();
    assert!(lit(RED));
    assert!(lit(GREEN));
    assert!(!lit(BLUE));
}

#[tokio::test(start_paused = true)]
async fn tasks_blink_at_their_own_rates() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    run_for(&orchestrator, Demo::Tasks, Duration::from_millis(4_500)).await;

    assert_eq!(rising(&board, RED), 2);
    assert_eq!(rising(&board, GREEN), 1);
    assert_eq!(rising(&board, BLUE), 1);
}

#[tokio::test(start_paused = true)]
async fn blink_toggles_status_led_each_second() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    run_for(&orchestrator, Demo::Blink, Duration::from_millis(3_500)).await;

    let levels = board.output_for(STATUS).unwrap().levels();
    assert_eq!(levels, vec![false, true, false, true]);
}

#[tokio::test(start_paused = true)]
async fn timer_blink_toggles_status_led() {
    let (orchestrator, board) = orchestrator(DemoConfig::default());

    run_for(&orchestrator, Demo::TimerBlink, Duration::from_millis(2_500)).await;

    assert_eq!(rising(&board, STATUS), 1);
    assert_eq!(board.output_for(STATUS).unwrap().levels().len(), 3);
}

