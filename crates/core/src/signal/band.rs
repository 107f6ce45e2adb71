// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Potentiometer bands

use serde::Serialize;

/// Levels for the red/green/blue LEDs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LedLevels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl LedLevels {
    pub const OFF: LedLevels = LedLevels {
        red: false,
        green: false,
        blue: false,
    };

    /// Levels for a raw sample: band 1 lights red, 2 adds green, 3 adds
    /// blue; band 0 and anything above 3 turn everything off.
    pub fn for_sample(raw: u16, band_width: u16) -> Self {
        match band_of(raw, band_width) {
            1 => LedLevels {
                red: true,
                ..Self::OFF
            },
            2 => LedLevels {
                red: true,
                green: true,
                blue: false,
            },
            3 => LedLevels {
                red: true,
                green: true,
                blue: true,
            },
            _ => Self::OFF,
        }
    }

    /// Number of LEDs lit
    pub fn lit(&self) -> u8 {
        u8::from(self.red) + u8::from(self.green) + u8::from(self.blue)
    }
}

/// Band index of a raw sample (integer division)
pub fn band_of(raw: u16, band_width: u16) -> u16 {
    raw.checked_div(band_width).unwrap_or(0)
}

#[cfg(test)]
#[path = "band_tests.rs"]
mod tests;
