// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let t1 = clock.now();
    let t2 = clock.now();
    assert!(t2 >= t1);
}

#[test]
fn fake_clock_only_moves_when_advanced() {
    let clock = FakeClock::new();
    let start = clock.now();
    assert_eq!(clock.elapsed_since(start), Duration::ZERO);

    clock.advance(Duration::from_millis(500));
    assert_eq!(clock.elapsed_since(start), Duration::from_millis(500));
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::new();
    let other = clock.clone();
    let start = clock.now();
    other.advance(Duration::from_secs(8));
    assert_eq!(clock.elapsed_since(start), Duration::from_secs(8));
}

#[test]
fn elapsed_since_a_later_instant_saturates() {
    let clock = FakeClock::new();
    let later = clock.now() + Duration::from_secs(1);
    assert_eq!(clock.elapsed_since(later), Duration::ZERO);
}
