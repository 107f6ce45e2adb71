// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn fake_output_records_writes_with_time() {
    let out = FakeOutput::new(PinId(25));
    out.set_level(true);
    tokio::time::sleep(Duration::from_millis(500)).await;
    out.set_level(false);

    let writes = out.writes();
    assert_eq!(out.levels(), vec![true, false]);
    assert_eq!(writes[1].at - writes[0].at, Duration::from_millis(500));
}

#[test]
fn rising_edges_ignore_repeated_high() {
    let out = FakeOutput::new(PinId(25));
    for level in [false, true, true, false, true] {
        out.set_level(level);
    }
    assert_eq!(out.rising_edges(), 2);
    assert!(out.is_high());
}
