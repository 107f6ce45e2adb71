// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    zero = { 0, 0 },
    below_first_band = { 999, 0 },
    red_only = { 1000, 1 },
    red_upper = { 1999, 1 },
    red_green = { 2500, 2 },
    all_three = { 3999, 3 },
    above_bands = { 4000, 0 },
    adc_max = { 4095, 0 },
)]
fn lit_count_per_sample(raw: u16, lit: u8) {
    assert_eq!(LedLevels::for_sample(raw, 1000).lit(), lit);
}

#[test]
fn band_two_lights_red_and_green() {
    let levels = LedLevels::for_sample(2000, 1000);
    assert!(levels.red);
    assert!(levels.green);
    assert!(!levels.blue);
}

#[test]
fn zero_band_width_is_band_zero() {
    assert_eq!(band_of(3000, 0), 0);
    assert_eq!(LedLevels::for_sample(3000, 0), LedLevels::OFF);
}
